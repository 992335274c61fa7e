// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Storage handles
//!
//! A handle to an artifact store located by name. The location may
//! itself be a forward reference, so lookup never forces resolution.

use crate::token::DeferredString;

/// Reference to an artifact store, located by (possibly deferred) name
#[derive(Debug, Clone)]
pub struct StorageHandle {
    location: DeferredString,
}

impl StorageHandle {
    /// Locate a store by name. Always succeeds; a bad name surfaces
    /// when the location token is resolved at render.
    pub fn locate(location: DeferredString) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &DeferredString {
        &self.location
    }
}
