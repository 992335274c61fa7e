// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Synthesis app and the exported-value registry
//!
//! The app is the root of a synthesis run. Pipelines publish named
//! string values into it ("exports") and other pipelines import them by
//! name. Imports always succeed synchronously; the lookup itself is
//! deferred to render time via [`DeferredString`].

use crate::error::SynthError;
use crate::token::{DeferredString, ExportRegistry};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Root of a synthesis run, holding the exported-value registry
#[derive(Debug, Default)]
pub struct App {
    exports: ExportRegistry,
}

impl App {
    pub fn new() -> Self {
        Self {
            exports: Rc::new(RefCell::new(BTreeMap::new())),
        }
    }

    /// Publish a named value for cross-pipeline consumption.
    ///
    /// Rejects duplicate names and empty values; an export that cannot
    /// be consumed must fail the publisher, not the consumer.
    pub fn register_export(
        &self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), SynthError> {
        let name = name.into();
        let value = value.into();
        if value.is_empty() {
            return Err(SynthError::EmptyExport(name));
        }
        let mut exports = self.exports.borrow_mut();
        if exports.contains_key(&name) {
            return Err(SynthError::DuplicateExport(name));
        }
        tracing::debug!(export = %name, "registered export");
        exports.insert(name, value);
        Ok(())
    }

    /// Import a value published elsewhere under `name`.
    ///
    /// Returns a forward reference immediately, whether or not the
    /// value has been registered yet. Resolution happens at render.
    pub fn import_value(&self, name: impl Into<String>) -> DeferredString {
        DeferredString::new(name, Rc::clone(&self.exports))
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
