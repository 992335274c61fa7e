// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Pipeline manifest parsing and definitions

mod parser;
mod pipeline;

pub use parser::{parse_manifest, Manifest, ParseError};
pub use pipeline::{ActionDef, PipelineDef, StageDef};
