// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Gantry Systems

//! Exported attribute resolver
//!
//! A bootstrap pipeline publishes three values describing where its
//! output lives: the storage bucket, the object key within it, and the
//! toolkit version it was built with. Their export names are derived
//! from the bootstrap pipeline's logical name by a fixed convention;
//! publisher and consumer must derive byte-identical names, so the
//! convention lives here and nowhere else.

use gantry_synth::{App, DeferredString};

/// Prefix shared by every bootstrap pipeline export
pub const EXPORT_PREFIX: &str = "cdk-pipeline";

/// Export name for the bucket holding the pipeline's output
pub fn bucket_export_name(pipeline: &str) -> String {
    format!("{}:{}-bucket", EXPORT_PREFIX, pipeline)
}

/// Export name for the object key of the pipeline's output
pub fn object_key_export_name(pipeline: &str) -> String {
    format!("{}:{}-object-key", EXPORT_PREFIX, pipeline)
}

/// Export name for the toolkit version the pipeline was built with
pub fn toolkit_version_export_name(pipeline: &str) -> String {
    format!("{}:{}-toolkit-version", EXPORT_PREFIX, pipeline)
}

/// The three published attributes of a bootstrap pipeline, imported as
/// forward references
#[derive(Debug, Clone)]
pub struct BootstrapAttributes {
    pub bucket_name: DeferredString,
    pub object_key: DeferredString,
    pub toolkit_version: DeferredString,
}

impl BootstrapAttributes {
    /// Import the attributes published under `pipeline`'s name.
    ///
    /// Never fails here: if the name does not correspond to a real
    /// published pipeline, each token fails at render with an
    /// unresolved-export error instead.
    pub fn import(app: &App, pipeline: &str) -> Self {
        Self {
            bucket_name: app.import_value(bucket_export_name(pipeline)),
            object_key: app.import_value(object_key_export_name(pipeline)),
            toolkit_version: app.import_value(toolkit_version_export_name(pipeline)),
        }
    }
}

#[cfg(test)]
#[path = "attributes_tests.rs"]
mod tests;
