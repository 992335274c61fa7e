// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Build projects and build specs
//!
//! A build project is the command-emitting step of a pipeline action:
//! an install phase and a build phase of opaque shell commands, plus
//! the policy statements attached to the project's execution identity.
//! The collaborator that executes these commands is out of scope; this
//! crate only describes them.

use crate::policy::PolicyStatement;
use serde::Serialize;

/// Two-phase command script emitted by a build step
#[derive(Debug, Clone, Serialize)]
pub struct BuildSpec {
    pub version: String,
    pub phases: BuildPhases,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildPhases {
    pub install: PhaseCommands,
    pub build: PhaseCommands,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhaseCommands {
    pub commands: Vec<String>,
}

impl BuildSpec {
    /// Spec format version understood by the build service
    pub const FORMAT_VERSION: &'static str = "0.2";

    pub fn new(install: Vec<String>, build: Vec<String>) -> Self {
        Self {
            version: Self::FORMAT_VERSION.to_string(),
            phases: BuildPhases {
                install: PhaseCommands { commands: install },
                build: PhaseCommands { commands: build },
            },
        }
    }

    pub fn build_commands(&self) -> &[String] {
        &self.phases.build.commands
    }

    pub fn install_commands(&self) -> &[String] {
        &self.phases.install.commands
    }
}

/// A named build project with its spec and execution-identity policy
#[derive(Debug, Clone, Serialize)]
pub struct BuildProject {
    pub name: String,
    pub build_spec: BuildSpec,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub policy: Vec<PolicyStatement>,
}

impl BuildProject {
    pub fn new(name: impl Into<String>, build_spec: BuildSpec) -> Self {
        Self {
            name: name.into(),
            build_spec,
            policy: Vec::new(),
        }
    }

    /// Attach a policy statement to this project's execution identity
    pub fn add_to_role_policy(&mut self, statement: PolicyStatement) {
        tracing::debug!(project = %self.name, "attached policy statement");
        self.policy.push(statement);
    }

    pub fn policy(&self) -> &[PolicyStatement] {
        &self.policy
    }
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
