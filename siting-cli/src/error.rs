//! Error types emitted by the siting CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use siting_core::WeightError;
use thiserror::Error;

/// Errors emitted by the siting CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A weight override was negative or not finite.
    #[error("invalid weight override: {0}")]
    InvalidWeight(#[from] WeightError),
    /// The requested heatmap density is larger than the engine produces.
    #[error("points per site must be at most {max}, got {requested}")]
    ExcessiveDensity { requested: usize, max: usize },
    /// The catalog path does not exist.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The catalog path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The catalog path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the site catalog failed.
    #[error("failed to open site catalog at {path:?}: {source}")]
    OpenCatalog {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The site catalog JSON could not be decoded.
    #[error("failed to parse site catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
