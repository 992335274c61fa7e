// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! gantry - declarative deployment pipeline synthesizer

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, synth};

#[derive(Parser)]
#[command(
    name = "gantry",
    version,
    about = "Gantry - declarative deployment pipeline synthesizer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a pipeline manifest into its deployment description
    Synth(synth::SynthArgs),
    /// Construct the pipeline without rendering it
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    setup_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Synth(args) => synth::run(args),
        Commands::Check(args) => check::run(args),
    }
}

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
