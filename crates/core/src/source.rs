// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Source binding
//!
//! Where a pipeline's input comes from: the bootstrap pipeline's
//! exported attributes bundled with a handle to the storage they point
//! at, plus the artifact downstream actions read as their input.

use crate::attributes::BootstrapAttributes;
use crate::error::PipelineError;
use crate::pipeline::{Action, Pipeline};
use crate::render::RenderedAction;
use gantry_synth::{App, StorageHandle};
use std::rc::Rc;

/// A named unit of output data passed between pipeline stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    name: String,
}

impl Artifact {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The pipeline's source binding: exported attributes plus the located
/// storage they reference
#[derive(Debug)]
pub struct PipelineSource {
    attributes: BootstrapAttributes,
    bucket: StorageHandle,
    output: Artifact,
}

impl PipelineSource {
    /// Name of the artifact the source stage publishes
    pub const OUTPUT_ARTIFACT: &'static str = "CloudAssembly";

    /// Bind to the bootstrap pipeline named `pipeline`.
    ///
    /// Synchronous and infallible; a bootstrap name that was never
    /// published fails on the attribute tokens at render.
    pub fn new(app: &App, pipeline: &str) -> Self {
        let attributes = BootstrapAttributes::import(app, pipeline);
        let bucket = StorageHandle::locate(attributes.bucket_name.clone());
        Self {
            attributes,
            bucket,
            output: Artifact::new(Self::OUTPUT_ARTIFACT),
        }
    }

    pub fn attributes(&self) -> &BootstrapAttributes {
        &self.attributes
    }

    /// The artifact other actions read from as their input
    pub fn output_artifact(&self) -> &Artifact {
        &self.output
    }

    /// Render the pull step that fetches the source artifact
    pub fn render(&self) -> Result<RenderedAction, PipelineError> {
        Ok(RenderedAction::Pull {
            name: "Pull".to_string(),
            bucket: self.bucket.location().resolve()?,
            object_key: self.attributes.object_key.resolve()?,
            output_artifact: self.output.name().to_string(),
        })
    }
}

/// The sole action of a pipeline's synthetic first stage
#[derive(Debug)]
pub struct SourceAction {
    source: Rc<PipelineSource>,
}

impl SourceAction {
    pub fn new(source: Rc<PipelineSource>) -> Self {
        Self { source }
    }
}

impl Action for SourceAction {
    fn name(&self) -> &str {
        "Pull"
    }

    // Default no-op bind: the source needs nothing from the pipeline.
    fn bind(&self, _pipeline: &dyn Pipeline) -> Result<(), PipelineError> {
        Ok(())
    }

    fn render(&self) -> Result<RenderedAction, PipelineError> {
        self.source.render()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
