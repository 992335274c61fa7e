// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Rendered pipeline model
//!
//! The output of the render phase: a plain, serializable description
//! with every deferred value forced. Stage and action order match
//! construction order exactly.

use gantry_synth::BuildProject;
use serde::Serialize;

/// A fully rendered pipeline description
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPipeline {
    pub name: String,
    pub stages: Vec<RenderedStage>,
}

/// One rendered stage, actions in construction order
#[derive(Debug, Clone, Serialize)]
pub struct RenderedStage {
    pub name: String,
    pub actions: Vec<RenderedAction>,
}

/// A rendered action
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderedAction {
    /// Fetch the source artifact from storage
    Pull {
        name: String,
        bucket: String,
        object_key: String,
        output_artifact: String,
    },
    /// Run a build project against an input artifact
    Build {
        name: String,
        input_artifact: String,
        project: BuildProject,
    },
}

impl RenderedAction {
    pub fn name(&self) -> &str {
        match self {
            RenderedAction::Pull { name, .. } => name,
            RenderedAction::Build { name, .. } => name,
        }
    }
}
