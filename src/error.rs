//! Error type shared by the analysis modules.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading captures, aligning series, or fitting.
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing acquisition parameter `{0}`")]
    MissingParam(String),

    #[error("acquisition parameter `{name}` is not numeric: `{value}`")]
    MalformedParam { name: String, value: String },

    #[error("path `{path}` contains no `{suffix}` component to substitute")]
    NoChannelSuffix { path: PathBuf, suffix: String },

    #[error("series lengths differ: {0} vs {1}")]
    LengthMismatch(usize, usize),

    #[error("line fit needs at least {needed} samples, got {got}")]
    TooFewSamples { needed: usize, got: usize },

    #[error("degenerate line fit: x values have no spread")]
    DegenerateFit,

    #[error("offset {offset} leaves no overlap between series of lengths {len_x} and {len_y}")]
    EmptyOverlap {
        offset: i64,
        len_x: usize,
        len_y: usize,
    },

    #[error("offset search range is empty")]
    EmptySearchRange,

    #[error("unsupported config format `{0}` (expected .yaml, .yml or .json)")]
    UnsupportedConfigFormat(String),

    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),
}
