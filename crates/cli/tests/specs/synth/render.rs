//! Synthesis specs
//!
//! Verify the rendered pipeline description end to end.

use crate::prelude::*;

const WORKSHOP_MANIFEST: &str = r#"
[pipeline]
name = "workshop"
bootstrap = "cdk-workshop"

[[pipeline.stage]]
name = "DeployWorkshop"

[[pipeline.stage.action]]
stack = "CdkWorkshopStack"
admin = true

[exports]
"cdk-pipeline:cdk-workshop-bucket" = "workshop-assets"
"cdk-pipeline:cdk-workshop-object-key" = "assembly.zip"
"cdk-pipeline:cdk-workshop-toolkit-version" = "1.18.0"
"#;

#[test]
fn synth_renders_the_full_pipeline() {
    let project = Project::empty();
    project.file("gantry.toml", WORKSHOP_MANIFEST);

    project
        .gantry()
        .args(&["synth"])
        .passes()
        .stdout_has("CdkWorkshopStack")
        .stdout_has("aws-cdk@1.18.0")
        .stdout_has("workshop-assets");
}

#[test]
fn source_stage_comes_first() {
    let project = Project::empty();
    project.file("gantry.toml", WORKSHOP_MANIFEST);

    let out = project.gantry().args(&["synth"]).passes().stdout();
    let rendered: serde_json::Value = serde_json::from_str(&out).unwrap();

    let stages = rendered["stages"].as_array().unwrap();
    assert_eq!(stages[0]["name"], "Source");
    assert_eq!(stages[1]["name"], "DeployWorkshop");
    assert_eq!(stages[0]["actions"][0]["type"], "pull");
}

#[test]
fn admin_action_carries_one_allow_all_statement() {
    let project = Project::empty();
    project.file("gantry.toml", WORKSHOP_MANIFEST);

    let out = project.gantry().args(&["synth"]).passes().stdout();
    let rendered: serde_json::Value = serde_json::from_str(&out).unwrap();

    let policy = rendered["stages"][1]["actions"][0]["project"]["policy"]
        .as_array()
        .unwrap();
    assert_eq!(policy.len(), 1);
    assert_eq!(policy[0]["actions"][0], "*");
    assert_eq!(policy[0]["resources"][0], "*");
}

#[test]
fn unpublished_bootstrap_fails_at_render_with_export_name() {
    let project = Project::empty();
    project.file(
        "gantry.toml",
        r#"
[pipeline]
name = "workshop"
bootstrap = "ghost"

[[pipeline.stage]]
name = "Deploy"

[[pipeline.stage.action]]
stack = "Foo"
"#,
    );

    project
        .gantry()
        .args(&["synth"])
        .fails()
        .stderr_has("cdk-pipeline:ghost");
}

#[test]
fn output_flag_writes_a_file() {
    let project = Project::empty();
    project.file("gantry.toml", WORKSHOP_MANIFEST);

    project
        .gantry()
        .args(&["synth", "--output", "pipeline.json"])
        .passes();

    let content = std::fs::read_to_string(project.path("pipeline.json")).unwrap();
    let rendered: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(rendered["name"], "workshop");
}
