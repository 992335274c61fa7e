//! Construction-only specs
//!
//! `check` runs phase 1 only, so a manifest whose exports were never
//! published still checks out; the missing values would only be needed
//! at render.

use crate::prelude::*;

#[test]
fn check_passes_without_published_exports() {
    let project = Project::empty();
    project.file(
        "gantry.toml",
        r#"
[pipeline]
name = "workshop"
bootstrap = "not-published-yet"

[[pipeline.stage]]
name = "Deploy"

[[pipeline.stage.action]]
stack = "Foo"
"#,
    );

    project
        .gantry()
        .args(&["check"])
        .passes()
        .stdout_has("ok: pipeline workshop")
        .stdout_has("2 stages");
}

#[test]
fn check_counts_source_stage_and_actions() {
    let project = Project::empty();
    project.file(
        "gantry.toml",
        r#"
[pipeline]
name = "p"
bootstrap = "b"

[[pipeline.stage]]
name = "A"

[[pipeline.stage.action]]
stack = "A1"

[[pipeline.stage.action]]
stack = "A2"

[[pipeline.stage]]
name = "B"

[[pipeline.stage.action]]
stack = "B1"
"#,
    );

    // Source stage is implicit, so 3 stages total; 3 deploy actions
    project
        .gantry()
        .args(&["check"])
        .passes()
        .stdout_has("3 stages")
        .stdout_has("3 actions");
}

#[test]
fn check_flags_broad_access_actions() {
    let project = Project::empty();
    project.file(
        "gantry.toml",
        r#"
[pipeline]
name = "p"
bootstrap = "b"

[[pipeline.stage]]
name = "Deploy"

[[pipeline.stage.action]]
stack = "Foo"
admin = true
"#,
    );

    project
        .gantry()
        .args(&["check"])
        .passes()
        .stdout_has("grants broad access");
}

#[test]
fn duplicate_stack_ids_fail_check() {
    // Two actions deploying the same stack would collide on their
    // build project identity; caught at construction, no render needed
    let project = Project::empty();
    project.file(
        "gantry.toml",
        r#"
[pipeline]
name = "p"
bootstrap = "b"

[[pipeline.stage]]
name = "Deploy"

[[pipeline.stage.action]]
stack = "Foo"

[[pipeline.stage.action]]
stack = "Foo"
"#,
    );

    project
        .gantry()
        .args(&["check"])
        .fails()
        .stderr_has("duplicate action Foo");
}

#[test]
fn empty_export_in_manifest_fails_check() {
    // Registration happens during construction, so this is fail-fast
    let project = Project::empty();
    project.file(
        "gantry.toml",
        r#"
[pipeline]
name = "p"
bootstrap = "b"

[exports]
"cdk-pipeline:b-bucket" = ""
"#,
    );

    project
        .gantry()
        .args(&["check"])
        .fails()
        .stderr_has("is empty");
}
