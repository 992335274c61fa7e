//! Help and usage specs

use crate::prelude::*;

#[test]
fn top_level_help_lists_subcommands() {
    Project::empty()
        .gantry()
        .args(&["--help"])
        .passes()
        .stdout_has("synth")
        .stdout_has("check");
}

#[test]
fn synth_help_documents_manifest_flag() {
    Project::empty()
        .gantry()
        .args(&["synth", "--help"])
        .passes()
        .stdout_has("--manifest")
        .stdout_has("--output");
}

#[test]
fn version_flag_works() {
    Project::empty()
        .gantry()
        .args(&["--version"])
        .passes()
        .stdout_has("gantry");
}
