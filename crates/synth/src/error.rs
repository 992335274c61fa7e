// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Error types for synthesis collaborators

use thiserror::Error;

/// Errors that can occur while registering or resolving exported values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthError {
    #[error("no exported value named {0}")]
    UnresolvedExport(String),
    #[error("exported value {0} is empty")]
    EmptyExport(String),
    #[error("exported value {0} is already registered")]
    DuplicateExport(String),
}
