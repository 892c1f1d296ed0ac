//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No validation logic lives here — format
//! resolution happens in the command layer.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "decval",
    bin_name = "decval",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Fixed-point decimal format validation",
    long_about = "Decval checks numeric strings against a fixed-point decimal \
                  format N(precision,scale) with an optional sign restriction.",
    after_help = "EXAMPLES:\n\
        \x20 decval check --format N(5,2) 12.34 0,1\n\
        \x20 decval check --precision 3 --scale 1 --only-positive +1.2\n\
        \x20 decval explain --format N(17,2)\n\
        \x20 decval completions bash > /usr/share/bash-completion/completions/decval",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate values against a number format.
    #[command(
        visible_alias = "c",
        about = "Validate values against a format",
        after_help = "EXAMPLES:\n\
            \x20 decval check --format N(5,2) 12.34\n\
            \x20 decval check --format N(3,1) -- -0.0 +1.2\n\
            \x20 decval check --precision 1 5 10\n\n\
        Exits 0 when every value conforms, 2 otherwise."
    )]
    Check(CheckArgs),

    /// Describe the constraints a format imposes.
    #[command(
        visible_alias = "ex",
        about = "Explain a format's constraints",
        after_help = "EXAMPLES:\n\
            \x20 decval explain --format N(5,2)\n\
            \x20 decval explain --format N(17,2) --output-format json"
    )]
    Explain(ExplainArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 decval completions bash > ~/.local/share/bash-completion/completions/decval\n\
            \x20 decval completions zsh  > ~/.zfunc/_decval\n\
            \x20 decval completions fish > ~/.config/fish/completions/decval.fish"
    )]
    Completions(CompletionsArgs),
}

// ── shared format flags ───────────────────────────────────────────────────────

/// Format selection flags shared by `check` and `explain`.
///
/// Either a spec string (`--format N(5,2)`) or explicit fields
/// (`--precision`/`--scale`). When neither is given, the command layer falls
/// back to the configured default format.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Format spec in `N(m,k)` notation.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "SPEC",
        conflicts_with_all = ["precision", "scale"],
        help = "Number format, e.g. N(5,2)"
    )]
    pub format: Option<String>,

    /// Maximum significant characters, sign included.
    #[arg(
        short = 'p',
        long = "precision",
        value_name = "M",
        allow_negative_numbers = true,
        help = "Maximum significant characters (sign included)"
    )]
    pub precision: Option<i32>,

    /// Maximum fractional digits.
    #[arg(
        short = 's',
        long = "scale",
        value_name = "K",
        requires = "precision",
        allow_negative_numbers = true,
        help = "Maximum fractional digits (default 0)"
    )]
    pub scale: Option<i32>,

    /// Reject values with a leading minus.
    #[arg(long = "only-positive", help = "Reject negative values")]
    pub only_positive: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `decval check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub format: FormatArgs,

    /// Values to validate. Use `--` before values starting with `-`.
    #[arg(
        value_name = "VALUE",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        help = "Values to validate"
    )]
    pub values: Vec<String>,
}

// ── explain ───────────────────────────────────────────────────────────────────

/// Arguments for `decval explain`.
#[derive(Debug, Args)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub format: FormatArgs,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `decval completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_check_with_spec() {
        let cli = Cli::parse_from(["decval", "check", "--format", "N(5,2)", "12.34"]);
        let Commands::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.format.format.as_deref(), Some("N(5,2)"));
        assert_eq!(args.values, vec!["12.34"]);
    }

    #[test]
    fn parse_check_with_fields_and_negative_value() {
        let cli = Cli::parse_from([
            "decval", "check", "-p", "3", "-s", "1", "--", "-0.0", "+1.2",
        ]);
        let Commands::Check(args) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.format.precision, Some(3));
        assert_eq!(args.format.scale, Some(1));
        assert_eq!(args.values, vec!["-0.0", "+1.2"]);
    }

    #[test]
    fn spec_conflicts_with_fields() {
        let result = Cli::try_parse_from([
            "decval", "check", "--format", "N(5,2)", "--precision", "5", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn scale_requires_precision() {
        let result = Cli::try_parse_from(["decval", "check", "--scale", "2", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn check_requires_a_value() {
        let result = Cli::try_parse_from(["decval", "check", "--format", "N(5,2)"]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["decval", "--quiet", "--verbose", "explain", "-f", "N(2)"]);
        assert!(result.is_err());
    }

    #[test]
    fn explain_parses_only_positive() {
        let cli = Cli::parse_from(["decval", "explain", "-f", "N(3,1)", "--only-positive"]);
        let Commands::Explain(args) = cli.command else {
            panic!("expected explain command");
        };
        assert!(args.format.only_positive);
    }
}
