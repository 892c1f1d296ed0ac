//! Implementation of the `decval check` command.

use decval_core::NumberValidator;
use tracing::debug;

use crate::{
    cli::{CheckArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: CheckArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let format = super::resolve_format(&args.format, &config)?;
    let validator = NumberValidator::new(format);
    debug!(%format, values = args.values.len(), "checking values");

    let total = args.values.len();
    let mut rejected = 0usize;

    match output.format() {
        OutputFormat::Json => {
            // JSON goes straight to stdout (bypasses the OutputManager so it
            // stays parseable in non-TTY pipes).
            let results: Vec<serde_json::Value> = args
                .values
                .iter()
                .map(|value| {
                    let valid = validator.is_valid_number(value);
                    if !valid {
                        rejected += 1;
                    }
                    serde_json::json!({ "value": value, "valid": valid })
                })
                .collect();
            let report = serde_json::json!({
                "format": format,
                "results": results,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into())
            );
        }

        _ => {
            for value in &args.values {
                if validator.is_valid_number(value) {
                    output.valid(value)?;
                } else {
                    rejected += 1;
                    output.invalid(value)?;
                }
            }
            output.info(&format!(
                "{} of {total} value(s) conform to {format}",
                total - rejected
            ))?;
        }
    }

    if rejected > 0 {
        return Err(CliError::ValuesRejected {
            rejected,
            total,
            format,
        });
    }
    Ok(())
}
