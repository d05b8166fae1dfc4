//! Harness error type.

use std::path::PathBuf;

use rvprint_core::{CapacityExhausted, FormatError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{path}: {source}")]
    Fixture {
        path: PathBuf,
        #[source]
        source: Box<HarnessError>,
    },
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("bad inputs for `{function}`: {reason}")]
    InvalidInputs { function: String, reason: String },
    #[error("bad argument `{0}`, expected kind:value (e.g. i32:-5, str:XY)")]
    InvalidArgument(String),
    #[error("unsupported word width {0}, expected 32 or 64")]
    InvalidWordWidth(u32),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Capacity(#[from] CapacityExhausted),
}

impl HarnessError {
    pub(crate) fn inputs(function: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInputs {
            function: function.to_string(),
            reason: reason.into(),
        }
    }
}
