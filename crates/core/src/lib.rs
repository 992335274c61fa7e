// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gantry-core: deployment pipeline descriptions with deferred binding
//!
//! This crate provides:
//! - Deploy actions built standalone and bound to a pipeline later
//! - An application pipeline that owns exactly one source binding
//! - Deferred values resolved once, at render time
//! - A non-reflective identity marker for pipeline kind checks
//!
//! Evaluation is two-phase: construction builds the full object graph
//! (including unevaluated thunks), then render walks the graph and
//! forces every deferred value. Single-threaded by design.

pub mod action;
pub mod attributes;
pub mod deferred;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod source;

pub use action::DeployStackAction;
pub use attributes::BootstrapAttributes;
pub use deferred::Deferred;
pub use error::PipelineError;
pub use pipeline::{
    is_application_pipeline, Action, ApplicationPipeline, Pipeline, PipelineMarker, Stage,
};
pub use render::{RenderedAction, RenderedPipeline, RenderedStage};
pub use source::{Artifact, PipelineSource, SourceAction};
