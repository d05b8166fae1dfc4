//! CLI entrypoint for the rvprint fixture harness.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rvprint_harness::config::HarnessConfig;
use rvprint_harness::execute::{convert_signed, convert_unsigned, render_printf};
use rvprint_harness::structured_log::{LogEmitter, LogLevel, now_utc};
use rvprint_harness::{
    ConformanceReport, FixtureArg, FixtureDigest, FixtureSet, TestRunner, VerificationSummary,
};

/// Fixture tooling for rvprint.
#[derive(Debug, Parser)]
#[command(name = "rvprint-harness")]
#[command(about = "Fixture verification harness for rvprint")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the engine and codec against fixture files.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; JSON is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Default word width in bits (overrides RVPRINT_WORD_BITS).
        #[arg(long)]
        word_bits: Option<u32>,
        /// Write structured JSONL records to this path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Render a template with typed arguments and print the output.
    Render {
        /// Template text, e.g. "{s}={i}".
        template: String,
        /// Arguments as kind:value (u64, ulong, i64, long, u32, i32, char, str).
        args: Vec<String>,
        /// Word width in bits (overrides RVPRINT_WORD_BITS).
        #[arg(long)]
        word_bits: Option<u32>,
    },
    /// Convert an integer to decimal text with a bounded buffer.
    Convert {
        /// Value to convert (signed or unsigned 64-bit).
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Destination capacity in bytes, terminator included.
        #[arg(long, default_value_t = 22)]
        capacity: usize,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            word_bits,
            log,
        } => {
            let config = HarnessConfig::resolve(word_bits)?;
            eprintln!(
                "Verifying against fixtures in {} ({})",
                fixture.display(),
                config.default_word
            );

            let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(&fixture)?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
                .collect();
            fixture_paths.sort();

            let mut fixture_sets = Vec::new();
            let mut digests = Vec::new();
            for path in fixture_paths {
                match FixtureSet::from_file_with_digest(&path) {
                    Ok((set, sha256)) => {
                        digests.push(FixtureDigest {
                            family: set.family.clone(),
                            path: path.display().to_string(),
                            sha256,
                            cases: set.cases.len(),
                        });
                        fixture_sets.push(set);
                    }
                    Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
                }
            }
            if fixture_sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let runner = TestRunner::new("fixture-verify", config);
            let mut results = Vec::new();
            match log {
                Some(log_path) => {
                    let mut emitter = LogEmitter::to_file(&log_path, "fixture-verify")?;
                    emitter.emit(LogLevel::Info, "verify_start")?;
                    for set in &fixture_sets {
                        results.extend(runner.run_logged(set, &mut emitter)?);
                    }
                    emitter.emit(LogLevel::Info, "verify_end")?;
                    emitter.flush()?;
                    eprintln!("Wrote log to {}", log_path.display());
                }
                None => {
                    for set in &fixture_sets {
                        results.extend(runner.run(set));
                    }
                }
            }

            let summary = VerificationSummary::from_results(results);
            for failure in summary.failures() {
                eprintln!("FAIL {} ({})", failure.case_name, failure.function);
                if let Some(diff) = &failure.diff {
                    eprint!("{diff}");
                }
            }
            let report_doc = ConformanceReport {
                title: String::from("rvprint Conformance Report"),
                word_bits: config.default_word.bits(),
                timestamp: now_utc(),
                fixtures: digests,
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Render {
            template,
            args,
            word_bits,
        } => {
            let config = HarnessConfig::resolve(word_bits)?;
            let args = args
                .iter()
                .map(|spec| FixtureArg::parse_cli(spec))
                .collect::<Result<Vec<_>, _>>()?;
            let output = render_printf(&config.print_config(None)?, template.as_bytes(), &args)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
        Command::Convert { value, capacity } => {
            let text = match value.parse::<i64>() {
                Ok(v) => convert_signed(v, capacity)?,
                Err(_) => convert_unsigned(value.parse::<u64>()?, capacity)?,
            };
            println!("{text}");
        }
    }

    Ok(())
}
