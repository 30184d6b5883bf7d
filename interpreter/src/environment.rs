// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use log::trace;

use crate::Value;

/// Variables of one scope, chained to the scope that encloses it.
#[derive(Default, Debug)]
pub struct Environment {
    enclosing: Option<Rc<RefCell<Environment>>>,
    variables: HashMap<String, Value>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Self {
            enclosing: Some(enclosing),
            variables: HashMap::new(),
        }
    }

    /// Defines a variable in this scope, replacing an earlier definition
    /// with the same name.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        trace!("Defining `{name}` as {value:?}");
        self.variables.insert(name, value);
    }

    pub fn find(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.variables.get(name) {
            return Some(value.clone());
        }

        self.enclosing.as_ref()?.borrow().find(name)
    }

    /// Assigns to the nearest scope that defines `name`. Returns `false` when
    /// no scope does.
    pub fn overwrite(&mut self, name: &str, new: Value) -> bool {
        if let Some(value) = self.variables.get_mut(name) {
            *value = new;
            return true;
        }

        if let Some(enclosing) = self.enclosing.as_ref() {
            return enclosing.borrow_mut().overwrite(name, new);
        }

        false
    }
}
