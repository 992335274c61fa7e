// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Synthesize a manifest into a rendered pipeline description

use super::{build_pipeline, load_manifest};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SynthArgs {
    /// Path to the pipeline manifest
    #[arg(long, default_value = "gantry.toml")]
    pub manifest: PathBuf,
    /// Write the rendered pipeline to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SynthArgs) -> anyhow::Result<()> {
    let manifest = load_manifest(&args.manifest)?;
    let pipeline = build_pipeline(&manifest)?;

    // Phase 2: force every deferred value
    let rendered = pipeline.render()?;
    let json = serde_json::to_string_pretty(&rendered)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("cannot write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote rendered pipeline");
        }
        None => println!("{}", json),
    }
    Ok(())
}
