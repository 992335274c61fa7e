// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Forward-reference string tokens
//!
//! A [`DeferredString`] names an exported value that may not exist yet
//! when the token is created. Construction never fails; resolution
//! happens at render time against the registry the token was minted
//! from, and fails there if the export was never published.

use crate::error::SynthError;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Shared name-to-value registry owned by the [`crate::App`]
pub(crate) type ExportRegistry = Rc<RefCell<BTreeMap<String, String>>>;

/// A string value imported by name, resolved only at render time
#[derive(Debug, Clone)]
pub struct DeferredString {
    name: String,
    exports: ExportRegistry,
}

impl DeferredString {
    pub(crate) fn new(name: impl Into<String>, exports: ExportRegistry) -> Self {
        Self {
            name: name.into(),
            exports,
        }
    }

    /// The export name this token refers to
    pub fn import_name(&self) -> &str {
        &self.name
    }

    /// Look up the published value.
    ///
    /// Fails if the export does not exist or resolved to an empty
    /// string. Re-resolving after the publisher has run is fine; the
    /// lookup has no side effects.
    pub fn resolve(&self) -> Result<String, SynthError> {
        let exports = self.exports.borrow();
        let value = exports
            .get(&self.name)
            .ok_or_else(|| SynthError::UnresolvedExport(self.name.clone()))?;
        if value.is_empty() {
            return Err(SynthError::EmptyExport(self.name.clone()));
        }
        Ok(value.clone())
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
