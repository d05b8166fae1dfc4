//! Fixture loading and management.

use std::path::Path;

use rvprint_core::Arg;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Function being tested (`printf`, `ll_to_str`, `ull_to_str`,
    /// `render_decimal`, `strlen`, `strstr`).
    pub function: String,
    /// What the case pins down, for the report.
    #[serde(default)]
    pub note: String,
    /// Input parameters, shaped per function.
    pub inputs: serde_json::Value,
    /// Expected output. Failures are spelled `error:<message>`.
    pub expected_output: String,
    /// Word width for this case; the run's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_bits: Option<u32>,
}

/// A collection of fixture cases for one function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        Self::from_file_with_digest(path).map(|(set, _)| set)
    }

    /// Load fixture set and the SHA-256 of the file it came from.
    pub fn from_file_with_digest(path: &Path) -> Result<(Self, String), HarnessError> {
        let wrap = |source: HarnessError| HarnessError::Fixture {
            path: path.to_path_buf(),
            source: Box::new(source),
        };
        let content = std::fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
        let set = Self::from_json(&content).map_err(|e| wrap(e.into()))?;
        Ok((set, sha256_hex(content.as_bytes())))
    }
}

/// Hex-encoded SHA-256 of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// A typed `printf` argument as written in fixture JSON,
/// e.g. `{"type": "i32", "value": -5}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FixtureArg {
    #[serde(rename = "u64")]
    U64(u64),
    #[serde(rename = "ulong")]
    UWord(u64),
    #[serde(rename = "i64")]
    I64(i64),
    #[serde(rename = "long")]
    IWord(i64),
    #[serde(rename = "u32")]
    U32(u32),
    #[serde(rename = "i32")]
    I32(i32),
    #[serde(rename = "char")]
    Char(u8),
    #[serde(rename = "str")]
    Str(String),
}

impl FixtureArg {
    /// Borrow as an engine argument.
    #[must_use]
    pub fn as_arg(&self) -> Arg<'_> {
        match self {
            Self::U64(v) => Arg::U64(*v),
            Self::UWord(v) => Arg::UWord(*v),
            Self::I64(v) => Arg::I64(*v),
            Self::IWord(v) => Arg::IWord(*v),
            Self::U32(v) => Arg::U32(*v),
            Self::I32(v) => Arg::I32(*v),
            Self::Char(c) => Arg::Char(*c),
            Self::Str(s) => Arg::Str(s.as_bytes()),
        }
    }

    /// Parse the CLI spelling `kind:value`, e.g. `i32:-5`, `str:XY`, `char:Q`.
    ///
    /// `char` takes either a single character or a decimal byte value.
    pub fn parse_cli(spec: &str) -> Result<Self, HarnessError> {
        let bad = || HarnessError::InvalidArgument(spec.to_string());
        let (kind, value) = spec.split_once(':').ok_or_else(bad)?;
        let arg = match kind {
            "u64" => Self::U64(value.parse().map_err(|_| bad())?),
            "ulong" => Self::UWord(value.parse().map_err(|_| bad())?),
            "i64" => Self::I64(value.parse().map_err(|_| bad())?),
            "long" => Self::IWord(value.parse().map_err(|_| bad())?),
            "u32" => Self::U32(value.parse().map_err(|_| bad())?),
            "i32" => Self::I32(value.parse().map_err(|_| bad())?),
            "char" => match value.as_bytes() {
                [c] => Self::Char(*c),
                _ => Self::Char(value.parse().map_err(|_| bad())?),
            },
            "str" => Self::Str(value.to_string()),
            _ => return Err(bad()),
        };
        Ok(arg)
    }
}
