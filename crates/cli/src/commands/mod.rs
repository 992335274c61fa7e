// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! CLI subcommands

pub mod check;
pub mod synth;

use anyhow::Context;
use gantry_core::{Action, ApplicationPipeline, DeployStackAction, Stage};
use gantry_manifest::Manifest;
use gantry_synth::App;
use std::path::Path;
use std::rc::Rc;

/// Read and parse the manifest at `path`
pub(crate) fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read manifest {}", path.display()))?;
    Ok(gantry_manifest::parse_manifest(&content)?)
}

/// Phase 1: register exports and construct the full pipeline graph.
/// The app can go out of scope afterwards; import tokens keep the
/// export registry alive.
pub(crate) fn build_pipeline(manifest: &Manifest) -> anyhow::Result<ApplicationPipeline> {
    let app = App::new();
    for (name, value) in &manifest.exports {
        app.register_export(name, value)?;
    }

    let stages = manifest
        .pipeline
        .stages
        .iter()
        .map(|stage| {
            let actions = stage
                .actions
                .iter()
                .map(|action| {
                    Rc::new(DeployStackAction::new(&action.stack, action.admin)) as Rc<dyn Action>
                })
                .collect();
            Stage::new(&stage.name, actions)
        })
        .collect();

    let pipeline = ApplicationPipeline::new(
        &app,
        &manifest.pipeline.name,
        &manifest.pipeline.bootstrap,
        stages,
    )?;
    Ok(pipeline)
}
