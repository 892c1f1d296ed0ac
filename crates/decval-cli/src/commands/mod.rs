//! Command handlers.

pub mod check;
pub mod completions;
pub mod explain;

use decval_core::NumberFormat;

use crate::{
    cli::FormatArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Resolve the effective format for a command.
///
/// Precedence: `--format SPEC`, then `--precision`/`--scale`, then the
/// configured `defaults.format`. The `--only-positive` flag and the
/// `defaults.only_positive` setting are OR-ed on top of whichever source
/// won.
pub fn resolve_format(args: &FormatArgs, config: &AppConfig) -> CliResult<NumberFormat> {
    let base = if let Some(spec) = &args.format {
        spec.parse::<NumberFormat>()?
    } else if let Some(precision) = args.precision {
        NumberFormat::new(precision, args.scale.unwrap_or(0), false)?
    } else if let Some(spec) = &config.defaults.format {
        spec.parse::<NumberFormat>()?
    } else {
        return Err(CliError::MissingFormat);
    };

    let only_positive = args.only_positive || config.defaults.only_positive;
    Ok(base.with_only_positive(only_positive))
}
