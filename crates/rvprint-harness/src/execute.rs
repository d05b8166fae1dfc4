//! Fixture case execution against `rvprint-core`.
//!
//! Every function renders its result as text so the runner can compare it
//! with `expected_output`.

use rvprint_core::stdio::render_decimal;
use rvprint_core::stdlib::{MAX_DECIMAL_LEN, ll_to_str, ull_to_str};
use rvprint_core::{Arg, PrintConfig, printf_with, string};
use serde_json::Value;

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::fixtures::{FixtureArg, FixtureCase};
use crate::recording::RecordingMachine;

/// Largest capacity a codec fixture may request.
pub const MAX_FIXTURE_CAPACITY: usize = 4096;

/// Execute one case and return its textual output.
pub fn execute_fixture_case(
    case: &FixtureCase,
    config: &HarnessConfig,
) -> Result<String, HarnessError> {
    let print_config = config.print_config(case.word_bits)?;
    execute_function(&case.function, &case.inputs, &print_config)
}

/// Dispatch `function` with JSON `inputs`.
pub fn execute_function(
    function: &str,
    inputs: &Value,
    config: &PrintConfig,
) -> Result<String, HarnessError> {
    match function {
        "printf" => {
            let template = str_field(function, inputs, "template")?;
            let args = fixture_args(function, inputs)?;
            render_printf(config, template.as_bytes(), &args)
        }
        "ll_to_str" => {
            let value = inputs
                .get("value")
                .and_then(Value::as_i64)
                .ok_or_else(|| HarnessError::inputs(function, "`value` must be an i64"))?;
            let capacity = capacity_field(function, inputs)?;
            convert_signed(value, capacity)
        }
        "ull_to_str" => {
            let value = inputs
                .get("value")
                .and_then(Value::as_u64)
                .ok_or_else(|| HarnessError::inputs(function, "`value` must be a u64"))?;
            let capacity = capacity_field(function, inputs)?;
            convert_unsigned(value, capacity)
        }
        "render_decimal" => {
            let magnitude = inputs
                .get("magnitude")
                .and_then(Value::as_u64)
                .ok_or_else(|| HarnessError::inputs(function, "`magnitude` must be a u64"))?;
            let negative = inputs
                .get("negative")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            let text = render_decimal(magnitude, negative);
            Ok(String::from_utf8_lossy(text.as_bytes()).into_owned())
        }
        "strlen" => {
            let s = str_field(function, inputs, "s")?;
            Ok(string::strlen(s.as_bytes()).to_string())
        }
        "strstr" => {
            let haystack = str_field(function, inputs, "haystack")?;
            let needle = str_field(function, inputs, "needle")?;
            Ok(match string::strstr(haystack.as_bytes(), needle.as_bytes()) {
                Some(offset) => offset.to_string(),
                None => String::from("none"),
            })
        }
        other => Err(HarnessError::UnknownFunction(other.to_string())),
    }
}

/// Render `template` through a recording machine.
pub fn render_printf(
    config: &PrintConfig,
    template: &[u8],
    args: &[FixtureArg],
) -> Result<String, HarnessError> {
    let args: Vec<Arg<'_>> = args.iter().map(FixtureArg::as_arg).collect();
    let mut machine = RecordingMachine::new();
    printf_with(config, &mut machine, template, &args)?;
    Ok(machine.output_lossy())
}

/// `ll_to_str` into a buffer of `capacity` bytes.
pub fn convert_signed(value: i64, capacity: usize) -> Result<String, HarnessError> {
    let mut buf = vec![0u8; capacity];
    let len = ll_to_str(value, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf[..len]).into_owned())
}

/// `ull_to_str` into a buffer of `capacity` bytes.
pub fn convert_unsigned(value: u64, capacity: usize) -> Result<String, HarnessError> {
    let mut buf = vec![0u8; capacity];
    let len = ull_to_str(value, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf[..len]).into_owned())
}

fn str_field<'v>(function: &str, inputs: &'v Value, key: &str) -> Result<&'v str, HarnessError> {
    inputs
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| HarnessError::inputs(function, format!("`{key}` must be a string")))
}

fn capacity_field(function: &str, inputs: &Value) -> Result<usize, HarnessError> {
    let capacity = inputs
        .get("capacity")
        .map_or(Some(MAX_DECIMAL_LEN as u64), Value::as_u64)
        .ok_or_else(|| HarnessError::inputs(function, "`capacity` must be a non-negative integer"))?;
    usize::try_from(capacity)
        .ok()
        .filter(|&c| c <= MAX_FIXTURE_CAPACITY)
        .ok_or_else(|| {
            HarnessError::inputs(
                function,
                format!("`capacity` must be at most {MAX_FIXTURE_CAPACITY}"),
            )
        })
}

fn fixture_args(function: &str, inputs: &Value) -> Result<Vec<FixtureArg>, HarnessError> {
    match inputs.get("args") {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_value(raw.clone())
            .map_err(|e| HarnessError::inputs(function, format!("`args`: {e}"))),
    }
}
