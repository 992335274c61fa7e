//! CLI error-path specs

use crate::prelude::*;

#[test]
fn missing_manifest_fails_with_path() {
    Project::empty()
        .gantry()
        .args(&["synth", "--manifest", "nope.toml"])
        .fails()
        .stderr_has("nope.toml");
}

#[test]
fn unknown_subcommand_fails() {
    Project::empty()
        .gantry()
        .args(&["deploy"])
        .fails()
        .stderr_has("unrecognized subcommand");
}

#[test]
fn invalid_toml_fails_with_parse_error() {
    let project = Project::empty();
    project.file("gantry.toml", "not [ valid");

    project
        .gantry()
        .args(&["check"])
        .fails()
        .stderr_has("TOML parse error");
}

#[test]
fn manifest_without_bootstrap_fails() {
    let project = Project::empty();
    project.file("gantry.toml", "[pipeline]\nname = \"p\"\n");

    project
        .gantry()
        .args(&["check"])
        .fails()
        .stderr_has("pipeline.bootstrap");
}
