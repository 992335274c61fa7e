// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Access-policy statements

use serde::Serialize;

/// An allow statement over a set of actions and resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyStatement {
    pub actions: Vec<String>,
    pub resources: Vec<String>,
}

impl PolicyStatement {
    pub fn new(actions: Vec<String>, resources: Vec<String>) -> Self {
        Self { actions, resources }
    }

    /// The unrestricted statement: every action on every resource.
    /// Callers attach this only behind an explicit, audited flag.
    pub fn allow_all() -> Self {
        Self {
            actions: vec!["*".to_string()],
            resources: vec!["*".to_string()],
        }
    }

    pub fn is_allow_all(&self) -> bool {
        self.actions.iter().any(|a| a == "*") && self.resources.iter().any(|r| r == "*")
    }
}
