//! Fixture verification harness for rvprint.
//!
//! This crate provides:
//! - Fixtures: JSON descriptions of `printf` and codec calls with expected output
//! - Execution: run a fixture case against `rvprint-core` through a recording machine
//! - Verification: compare, diff, and summarize results
//! - Reports: markdown + JSON, with SHA-256 digests of the fixture files
//! - Structured logging: JSONL records of every verification run

#![forbid(unsafe_code)]

pub mod config;
pub mod diff;
pub mod error;
pub mod execute;
pub mod fixtures;
pub mod recording;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureArg, FixtureCase, FixtureSet};
pub use recording::RecordingMachine;
pub use report::{ConformanceReport, FixtureDigest};
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
