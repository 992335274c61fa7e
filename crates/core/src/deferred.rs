// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Deferred values
//!
//! A [`Deferred`] wraps a zero-argument resolver for a value that does
//! not exist yet when the wrapper is created. The first successful
//! `get` caches the value; later calls return the cache without
//! re-invoking the resolver. A failed resolution is not cached, so a
//! retried render re-invokes the resolver; resolvers must therefore be
//! side-effect-idempotent.

use crate::error::PipelineError;
use std::cell::RefCell;
use std::fmt;

/// A lazily resolved, memoized value
pub struct Deferred<T> {
    cell: RefCell<Option<T>>,
    resolver: Box<dyn Fn() -> Result<T, PipelineError>>,
}

impl<T: Clone> Deferred<T> {
    pub fn new<F>(resolver: F) -> Self
    where
        F: Fn() -> Result<T, PipelineError> + 'static,
    {
        Self {
            cell: RefCell::new(None),
            resolver: Box::new(resolver),
        }
    }

    /// Force the value, resolving it on first use
    pub fn get(&self) -> Result<T, PipelineError> {
        if let Some(value) = self.cell.borrow().as_ref() {
            return Ok(value.clone());
        }
        let value = (self.resolver)()?;
        *self.cell.borrow_mut() = Some(value.clone());
        Ok(value)
    }

    /// Check whether a value has been resolved and cached
    pub fn is_resolved(&self) -> bool {
        self.cell.borrow().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("resolved", &self.cell.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "deferred_tests.rs"]
mod tests;
