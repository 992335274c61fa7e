// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Pipeline definitions

use serde::{Deserialize, Serialize};

/// A deploy action within a stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDef {
    /// Identifier of the stack to deploy
    pub stack: String,
    /// Grant the action's build identity unrestricted access
    #[serde(default)]
    pub admin: bool,
}

/// An ordered group of actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDef {
    /// Stage name
    pub name: String,
    /// Ordered actions
    #[serde(default)]
    pub actions: Vec<ActionDef>,
}

/// A pipeline definition from the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineDef {
    /// Pipeline name
    pub name: String,
    /// Logical name of the bootstrap pipeline supplying the source
    pub bootstrap: String,
    /// Ordered caller stages (the source stage is added implicitly)
    #[serde(default)]
    pub stages: Vec<StageDef>,
}

impl PipelineDef {
    /// Get a stage by name
    pub fn get_stage(&self, name: &str) -> Option<&StageDef> {
        self.stages.iter().find(|s| s.name == name)
    }

    /// Total number of actions across all stages
    pub fn action_count(&self) -> usize {
        self.stages.iter().map(|s| s.actions.len()).sum()
    }

    /// Whether any action requests broad access
    pub fn has_admin_actions(&self) -> bool {
        self.stages
            .iter()
            .any(|s| s.actions.iter().any(|a| a.admin))
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
