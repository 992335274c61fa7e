// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Error types for pipeline construction, binding, and rendering
//!
//! Structural errors (wrong pipeline kind, unbound access, rebinding)
//! are fail-fast at construction or bind time. Data-availability
//! errors (an export nobody published) are deferred and surface only
//! at render, wrapped as [`PipelineError::Synth`].

use gantry_synth::SynthError;
use thiserror::Error;

/// Errors that can occur while building or rendering a pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A deferred value was read before its action was bound.
    /// Indicates a construction-order bug, never retried.
    #[error("action {action} is not bound to an application pipeline")]
    Unbound { action: String },
    /// The action was attached to a pipeline that fails the identity
    /// marker check.
    #[error("deploy action {action} must be added to an application pipeline")]
    WrongPipelineKind { action: String },
    /// The pipeline passed the marker check but exposes no source
    /// binding. Unreachable for pipelines built by this crate.
    #[error("cannot find source of application pipeline {pipeline}")]
    MissingSource { pipeline: String },
    /// A second bind would silently switch the action's upstream
    /// source, so it is a hard error.
    #[error("action {action} is already bound and cannot be rebound to pipeline {pipeline}")]
    AlreadyBound { action: String, pipeline: String },
    /// Two actions in the same pipeline share a name. Build project
    /// identities are derived from action names, so this would be an
    /// identity collision at render.
    #[error("duplicate action {action} in pipeline {pipeline}")]
    DuplicateAction { action: String, pipeline: String },
    /// Deferred export lookup failed at render time
    #[error(transparent)]
    Synth(#[from] SynthError),
}
