//! Implementation of the `decval explain` command.

use crate::{
    cli::{ExplainArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: ExplainArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let format = super::resolve_format(&args.format, &config)?;

    if output.format() == OutputFormat::Json {
        // Machine-readable; bypasses the OutputManager for pipe-safety.
        println!(
            "{}",
            serde_json::to_string_pretty(&format).unwrap_or_else(|_| "{}".into())
        );
        return Ok(());
    }

    output.header(&format.to_string())?;
    output.print(&format!(
        "  precision: {:<3} significant characters at most, sign included",
        format.precision()
    ))?;
    output.print(&format!(
        "  scale:     {:<3} fractional digit(s) at most",
        format.scale()
    ))?;
    output.print(&format!(
        "  sign:      {}",
        if format.only_positive() {
            "optional '+' only"
        } else {
            "optional '+' or '-'"
        }
    ))?;
    output.print("  separator: '.' or ',' between integer and fractional digits")?;

    Ok(())
}
