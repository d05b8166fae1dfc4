//! Test execution engine.

use serde_json::json;

use crate::config::HarnessConfig;
use crate::diff;
use crate::execute::execute_fixture_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    /// Word-width settings for the run.
    pub config: HarnessConfig,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>, config: HarnessConfig) -> Self {
        Self {
            campaign: campaign.into(),
            config,
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| self.run_case(case).0)
            .collect()
    }

    /// Run all fixtures, writing one log record per case plus start and end records.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "family_start")
                .with_campaign(&self.campaign)
                .with_family(&fixture_set.family)
                .with_details(json!({ "cases": fixture_set.cases.len() })),
        )?;

        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let (result, outcome) = self.run_case(case);
            let level = match outcome {
                Outcome::Pass => LogLevel::Info,
                Outcome::Fail | Outcome::Error => LogLevel::Warn,
            };
            let mut entry = LogEntry::new("", level, "case_result")
                .with_campaign(&self.campaign)
                .with_family(&fixture_set.family)
                .with_case(&case.name, &case.function)
                .with_outcome(outcome);
            if let Ok(print_config) = self.config.print_config(case.word_bits) {
                entry = entry.with_word_bits(print_config.word.bits());
            }
            if !result.passed {
                entry = entry.with_details(json!({
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            }
            log.emit_entry(entry)?;
            results.push(result);
        }

        let passed = results.iter().filter(|r| r.passed).count();
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "family_end")
                .with_campaign(&self.campaign)
                .with_family(&fixture_set.family)
                .with_details(json!({ "passed": passed, "failed": results.len() - passed })),
        )?;
        Ok(results)
    }

    fn run_case(&self, case: &FixtureCase) -> (VerificationResult, Outcome) {
        let (actual, outcome) = match execute_fixture_case(case, &self.config) {
            Ok(output) => (output, None),
            Err(err) => (format!("error:{err}"), Some(Outcome::Error)),
        };
        let passed = actual == case.expected_output;
        let outcome = match (passed, outcome) {
            (true, _) => Outcome::Pass,
            (false, Some(error)) => error,
            (false, None) => Outcome::Fail,
        };
        let diff = (!passed).then(|| diff::render_diff(&case.expected_output, &actual));
        let result = VerificationResult {
            case_name: case.name.clone(),
            function: case.function.clone(),
            note: case.note.clone(),
            passed,
            expected: case.expected_output.clone(),
            actual,
            diff,
        };
        (result, outcome)
    }
}
