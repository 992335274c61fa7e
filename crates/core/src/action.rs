// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Deploy action
//!
//! A deploy action is one "deploy this stack" step. It is constructed
//! standalone, before the pipeline it will belong to exists, and holds
//! deferred values for its input artifact and toolkit version. Binding
//! happens exactly once, when the action's stage is added to an
//! application pipeline; only at render are the deferred values forced
//! against the now-bound source.

use crate::deferred::Deferred;
use crate::error::PipelineError;
use crate::pipeline::{is_application_pipeline, Action, Pipeline};
use crate::render::RenderedAction;
use crate::source::{Artifact, PipelineSource};
use gantry_synth::{BuildProject, BuildSpec, PolicyStatement};
use std::cell::RefCell;
use std::rc::Rc;

/// Bind slot shared with the action's deferred resolvers
type SourceSlot = Rc<RefCell<Option<Rc<PipelineSource>>>>;

/// A deploy-a-stack step. Unbound until added to an application
/// pipeline; bound exactly once, for life.
pub struct DeployStackAction {
    stack_name: String,
    admin: bool,
    slot: SourceSlot,
    version: Deferred<String>,
    artifact: Deferred<Artifact>,
}

impl DeployStackAction {
    /// Construct an unbound action for `stack_name`.
    ///
    /// `admin` grants the action's build identity an unrestricted
    /// allow-all policy statement. Deliberately an explicit boolean:
    /// broad access is an audited escape hatch, never a default.
    pub fn new(stack_name: impl Into<String>, admin: bool) -> Self {
        let stack_name = stack_name.into();
        let slot: SourceSlot = Rc::new(RefCell::new(None));

        let version = {
            let slot = Rc::clone(&slot);
            let action = stack_name.clone();
            Deferred::new(move || {
                let bound = slot.borrow();
                let source = bound
                    .as_ref()
                    .ok_or_else(|| PipelineError::Unbound {
                        action: action.clone(),
                    })?;
                Ok(source.attributes().toolkit_version.resolve()?)
            })
        };

        let artifact = {
            let slot = Rc::clone(&slot);
            let action = stack_name.clone();
            Deferred::new(move || {
                let bound = slot.borrow();
                let source = bound
                    .as_ref()
                    .ok_or_else(|| PipelineError::Unbound {
                        action: action.clone(),
                    })?;
                Ok(source.output_artifact().clone())
            })
        };

        Self {
            stack_name,
            admin,
            slot,
            version,
            artifact,
        }
    }

    pub fn stack_name(&self) -> &str {
        &self.stack_name
    }

    pub fn is_bound(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// The source binding this action was bound to
    pub fn source(&self) -> Result<Rc<PipelineSource>, PipelineError> {
        self.slot
            .borrow()
            .as_ref()
            .map(Rc::clone)
            .ok_or_else(|| PipelineError::Unbound {
                action: self.stack_name.clone(),
            })
    }

    /// Assemble the build project that executes the deployment
    fn build_project(&self) -> Result<BuildProject, PipelineError> {
        let version = self.version.get()?;
        let spec = BuildSpec::new(
            vec!["npx npm@latest ci".to_string()],
            vec![format!(
                "npx --package aws-cdk@{} -- cdk deploy --require-approval=never {}",
                version, self.stack_name
            )],
        );

        let mut project = BuildProject::new(format!("{}Deployment", self.stack_name), spec);
        if self.admin {
            project.add_to_role_policy(PolicyStatement::allow_all());
        }
        Ok(project)
    }
}

impl Action for DeployStackAction {
    fn name(&self) -> &str {
        &self.stack_name
    }

    /// Transition Unbound -> Bound. One-way, checked in order: the
    /// pipeline must carry the application marker, must expose a
    /// source, and the action must not already be bound.
    fn bind(&self, pipeline: &dyn Pipeline) -> Result<(), PipelineError> {
        if !is_application_pipeline(pipeline) {
            return Err(PipelineError::WrongPipelineKind {
                action: self.stack_name.clone(),
            });
        }

        let source = pipeline
            .source()
            .ok_or_else(|| PipelineError::MissingSource {
                pipeline: pipeline.name().to_string(),
            })?;

        let mut bound = self.slot.borrow_mut();
        if bound.is_some() {
            return Err(PipelineError::AlreadyBound {
                action: self.stack_name.clone(),
                pipeline: pipeline.name().to_string(),
            });
        }

        tracing::debug!(
            action = %self.stack_name,
            pipeline = %pipeline.name(),
            "bound deploy action"
        );
        *bound = Some(source);
        Ok(())
    }

    fn render(&self) -> Result<RenderedAction, PipelineError> {
        let project = self.build_project()?;
        Ok(RenderedAction::Build {
            name: self.stack_name.clone(),
            input_artifact: self.artifact.get()?.name().to_string(),
            project,
        })
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
