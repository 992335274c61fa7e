// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Manifest TOML parsing

use crate::{ActionDef, PipelineDef, StageDef};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur during manifest parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// A parsed manifest: the pipeline definition plus any exports the
/// bootstrap pipeline has published
#[derive(Debug, Clone)]
pub struct Manifest {
    pub pipeline: PipelineDef,
    pub exports: BTreeMap<String, String>,
}

/// Parse a manifest from TOML content
pub fn parse_manifest(content: &str) -> Result<Manifest, ParseError> {
    let raw: toml::Value = toml::from_str(content)?;
    let table = raw
        .as_table()
        .ok_or_else(|| ParseError::InvalidFormat("root must be a table".to_string()))?;

    let pipeline_value = table
        .get("pipeline")
        .ok_or_else(|| ParseError::MissingField("pipeline".to_string()))?;
    let pipeline = parse_pipeline(pipeline_value)?;

    let mut exports = BTreeMap::new();
    if let Some(export_table) = table.get("exports").and_then(|v| v.as_table()) {
        for (name, value) in export_table {
            let value = value.as_str().ok_or_else(|| {
                ParseError::InvalidFormat(format!("exports.{} must be a string", name))
            })?;
            exports.insert(name.clone(), value.to_string());
        }
    }

    Ok(Manifest { pipeline, exports })
}

fn parse_pipeline(value: &toml::Value) -> Result<PipelineDef, ParseError> {
    let table = value
        .as_table()
        .ok_or_else(|| ParseError::InvalidFormat("pipeline must be a table".to_string()))?;

    let name = table
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ParseError::MissingField("pipeline.name".to_string()))?
        .to_string();

    let bootstrap = table
        .get("bootstrap")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ParseError::MissingField("pipeline.bootstrap".to_string()))?
        .to_string();

    let mut stages = Vec::new();
    if let Some(stage_values) = table.get("stage").and_then(|v| v.as_array()) {
        for stage_value in stage_values {
            stages.push(parse_stage(stage_value)?);
        }
    }

    Ok(PipelineDef {
        name,
        bootstrap,
        stages,
    })
}

fn parse_stage(value: &toml::Value) -> Result<StageDef, ParseError> {
    let table = value
        .as_table()
        .ok_or_else(|| ParseError::InvalidFormat("stage must be a table".to_string()))?;

    let name = table
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ParseError::MissingField("stage.name".to_string()))?
        .to_string();

    let mut actions = Vec::new();
    if let Some(action_values) = table.get("action").and_then(|v| v.as_array()) {
        for action_value in action_values {
            actions.push(parse_action(&name, action_value)?);
        }
    }

    Ok(StageDef { name, actions })
}

fn parse_action(stage: &str, value: &toml::Value) -> Result<ActionDef, ParseError> {
    let table = value.as_table().ok_or_else(|| {
        ParseError::InvalidFormat(format!("stage.{}.action must be a table", stage))
    })?;

    let stack = table
        .get("stack")
        .and_then(|v| v.as_str())
        .ok_or_else(|| ParseError::MissingField(format!("stage.{}.action.stack", stage)))?
        .to_string();

    let admin = table
        .get("admin")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    Ok(ActionDef { stack, admin })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
