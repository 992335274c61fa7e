// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Construct a pipeline without rendering it
//!
//! Exercises only phase 1: manifest parsing, pipeline construction,
//! and action binding. Structural errors (wrong pipeline kind, rebind)
//! surface here; missing exports do not, since nothing is resolved.

use super::{build_pipeline, load_manifest};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the pipeline manifest
    #[arg(long, default_value = "gantry.toml")]
    pub manifest: PathBuf,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let manifest = load_manifest(&args.manifest)?;
    let pipeline = build_pipeline(&manifest)?;

    println!(
        "ok: pipeline {} ({} stages, {} actions)",
        pipeline.name(),
        pipeline.stages().len(),
        manifest.pipeline.action_count()
    );
    if manifest.pipeline.has_admin_actions() {
        println!("note: at least one deploy action grants broad access");
    }
    Ok(())
}
