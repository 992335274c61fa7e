// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gantry-synth: synthesis-time collaborators for pipeline descriptions
//!
//! This crate models the infrastructure-assembly surface the core
//! consumes: an app holding exported values, forward-reference string
//! tokens resolved at render time, storage handles, build projects,
//! and access-policy statements. It describes infrastructure; it never
//! provisions it.

mod app;
mod build;
mod error;
mod policy;
mod storage;
mod token;

pub use app::App;
pub use build::{BuildPhases, BuildProject, BuildSpec, PhaseCommands};
pub use error::SynthError;
pub use policy::PolicyStatement;
pub use storage::StorageHandle;
pub use token::DeferredString;
