// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Application pipeline and the identity marker protocol
//!
//! An application pipeline owns exactly one source binding and an
//! ordered list of stages. Deploy actions are constructed standalone
//! and bound when their stage is added, so every action needs a way to
//! verify that the pipeline it landed in really is an application
//! pipeline. `instanceof`-style checks break when the checking code
//! and the checked object come from independently loaded copies of the
//! same abstraction, so identity is carried as data: an opaque marker
//! only this crate can mint, attached at construction and compared by
//! value.

use crate::error::PipelineError;
use crate::render::{RenderedAction, RenderedPipeline, RenderedStage};
use crate::source::{PipelineSource, SourceAction};
use gantry_synth::App;
use std::fmt;
use std::rc::Rc;

/// Tag carried by every application pipeline. Fixed value rather than
/// type metadata so that the check survives crate-copy boundaries.
pub(crate) const APPLICATION_PIPELINE_MARKER: &str = "4501D193-76B7-45D6-836E-3E657F21AD69";

/// Opaque identity marker. The field is private, so only this crate
/// can produce a valid instance; the tag comparison is kept as a
/// fallback for independently loaded copies of this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineMarker {
    tag: &'static str,
}

impl PipelineMarker {
    pub(crate) fn application() -> Self {
        Self {
            tag: APPLICATION_PIPELINE_MARKER,
        }
    }
}

/// Any pipeline-like object an action can be attached to
pub trait Pipeline {
    fn name(&self) -> &str;

    /// Identity marker attached at construction, if any
    fn marker(&self) -> Option<PipelineMarker> {
        None
    }

    /// The pipeline's source binding, if it has one
    fn source(&self) -> Option<Rc<PipelineSource>> {
        None
    }
}

/// Check whether `pipeline` was produced by [`ApplicationPipeline::new`].
///
/// The marker, not the structural shape, determines the result.
pub fn is_application_pipeline(pipeline: &dyn Pipeline) -> bool {
    matches!(pipeline.marker(), Some(marker) if marker.tag == APPLICATION_PIPELINE_MARKER)
}

/// A single executable step within a stage
pub trait Action {
    fn name(&self) -> &str;

    /// Bind hook invoked once when the action is added to a pipeline
    /// stage. Actions without forward references keep the no-op
    /// default.
    fn bind(&self, _pipeline: &dyn Pipeline) -> Result<(), PipelineError> {
        Ok(())
    }

    /// Produce the rendered form, forcing deferred values. Must be
    /// idempotent; render may run more than once.
    fn render(&self) -> Result<RenderedAction, PipelineError>;
}

/// An ordered group of actions executed together
pub struct Stage {
    name: String,
    actions: Vec<Rc<dyn Action>>,
}

impl Stage {
    pub fn new(name: impl Into<String>, actions: Vec<Rc<dyn Action>>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[Rc<dyn Action>] {
        &self.actions
    }
}

/// A pipeline sourced from a bootstrap pipeline's published output
pub struct ApplicationPipeline {
    name: String,
    marker: PipelineMarker,
    source: Rc<PipelineSource>,
    stages: Vec<Stage>,
}

impl ApplicationPipeline {
    /// Construct the pipeline and bind every supplied action.
    ///
    /// Order is strict: the marker is attached first, then the source
    /// binding is built from `bootstrap`, then a synthetic `Source`
    /// stage is inserted, and only then are caller stages added. No
    /// action can ever observe a pipeline without a source.
    pub fn new(
        app: &App,
        name: impl Into<String>,
        bootstrap: &str,
        stages: Vec<Stage>,
    ) -> Result<Self, PipelineError> {
        let name = name.into();
        let marker = PipelineMarker::application();
        let source = Rc::new(PipelineSource::new(app, bootstrap));

        let mut pipeline = Self {
            name,
            marker,
            source: Rc::clone(&source),
            stages: Vec::new(),
        };

        pipeline.stages.push(Stage::new(
            "Source",
            vec![Rc::new(SourceAction::new(source)) as Rc<dyn Action>],
        ));

        for stage in stages {
            pipeline.add_stage(stage)?;
        }

        tracing::debug!(
            pipeline = %pipeline.name,
            stages = pipeline.stages.len(),
            "constructed application pipeline"
        );
        Ok(pipeline)
    }

    /// Add a stage, invoking each action's bind hook.
    ///
    /// Action names must be unique across the whole pipeline; deploy
    /// actions derive their build project identity from the stack
    /// name, so a duplicate would collide at render. Checked before
    /// any action in the stage is bound.
    fn add_stage(&mut self, stage: Stage) -> Result<(), PipelineError> {
        for (index, action) in stage.actions().iter().enumerate() {
            let mut earlier = stage.actions()[..index]
                .iter()
                .map(|a| a.name())
                .chain(self.stages.iter().flat_map(|s| {
                    s.actions().iter().map(|a| a.name())
                }));
            if earlier.any(|name| name == action.name()) {
                return Err(PipelineError::DuplicateAction {
                    action: action.name().to_string(),
                    pipeline: self.name.clone(),
                });
            }
        }
        for action in stage.actions() {
            action.bind(self)?;
        }
        self.stages.push(stage);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// The pipeline's source binding
    pub fn source(&self) -> &Rc<PipelineSource> {
        &self.source
    }

    /// Render the pipeline, forcing every deferred value.
    ///
    /// Deferred values are memoized, so repeated renders are cheap and
    /// produce identical output.
    pub fn render(&self) -> Result<RenderedPipeline, PipelineError> {
        tracing::debug!(pipeline = %self.name, "rendering pipeline");
        let stages = self
            .stages
            .iter()
            .map(|stage| {
                let actions = stage
                    .actions()
                    .iter()
                    .map(|action| action.render())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(RenderedStage {
                    name: stage.name().to_string(),
                    actions,
                })
            })
            .collect::<Result<Vec<_>, PipelineError>>()?;

        Ok(RenderedPipeline {
            name: self.name.clone(),
            stages,
        })
    }
}

// Actions are trait objects, so Debug cannot be derived
impl fmt::Debug for ApplicationPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApplicationPipeline")
            .field("name", &self.name)
            .field(
                "stages",
                &self.stages.iter().map(Stage::name).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

impl Pipeline for ApplicationPipeline {
    fn name(&self) -> &str {
        &self.name
    }

    fn marker(&self) -> Option<PipelineMarker> {
        Some(self.marker.clone())
    }

    fn source(&self) -> Option<Rc<PipelineSource>> {
        Some(Rc::clone(&self.source))
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
