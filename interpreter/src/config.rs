// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fs, path::Path};

use anyhow::Context;
use log::debug;
use xerith::ConfigRoot;

pub const CONFIG_FILE_NAME: &str = "xerith.toml";

/// Reads `xerith.toml` from `directory`. A missing file yields the defaults.
pub fn load_config(directory: &Path) -> anyhow::Result<ConfigRoot> {
    let path = directory.join(CONFIG_FILE_NAME);

    if !path.is_file() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(ConfigRoot::default());
    }

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("invalid configuration in {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<ConfigRoot, toml::de::Error> {
    toml::from_str(contents)
}
