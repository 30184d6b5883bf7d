// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod source_code;
mod span;
mod spanned;

pub use self::{
    source_code::SourceCode,
    span::Span,
    spanned::Spanned,
};
