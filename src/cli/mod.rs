//! CLI module for rlint
//!
//! This module provides the command-line interface for the linter.
//!
//! ## Commands
//!
//! - `rlint <file>...` / `lint <file>...` - Lint R source files
//! - `tokens <file> | -e <code>` - Print the token stream
//! - `parse <file> | -e <code>` - Print the syntax tree and syntax errors
//! - `checkers` - List the registered checkers
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//! - `output` - Text, JSON and graphical renderers
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;
pub mod output;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::lint::LintConfig;
use crate::version::RLINT_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// Findings that fail the run.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Bad usage, unreadable input, or a fatal resource fault.
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Static checker for R source code
#[derive(Parser, Debug)]
#[command(name = "rlint")]
#[command(version = RLINT_VERSION)]
#[command(about = "Tokenizer, parser and static checker for R source code", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Files to lint (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub options: LintOptions,
}

/// Options shared by the default action and `lint`.
#[derive(Args, Debug, Clone, Default)]
pub struct LintOptions {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Disable a checker by name (repeatable)
    #[arg(long = "disable", value_name = "NAME")]
    pub disable: Vec<String>,

    /// Maximum expression nesting depth before a file is rejected
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,

    /// Exit non-zero on warnings, not just errors
    #[arg(long)]
    pub deny_warnings: bool,
}

impl LintOptions {
    /// Build the checker configuration these flags describe.
    pub fn to_config(&self) -> CliResult<LintConfig> {
        let mut config = LintConfig::new()
            .with_disabled(&self.disable)
            .map_err(|e| CliError::usage(format!("Error: {e}")))?;
        if let Some(depth) = self.max_depth {
            config = config.with_max_nesting_depth(depth);
        }
        Ok(config)
    }
}

/// How findings are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Source excerpts with labels
    #[default]
    Pretty,
    /// One `path:row:column: severity[code]: message` line per finding
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lint R source files
    Lint {
        /// Files to lint
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        options: LintOptions,
    },

    /// Print the token stream
    Tokens {
        /// Source file to tokenize
        #[arg(value_name = "FILE", conflicts_with = "expr", required_unless_present = "expr")]
        file: Option<PathBuf>,
        /// Tokenize inline source code
        #[arg(short = 'e', long = "expr", value_name = "CODE")]
        expr: Option<String>,
        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the syntax tree and any syntax errors
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE", conflicts_with = "expr", required_unless_present = "expr")]
        file: Option<PathBuf>,
        /// Parse inline source code
        #[arg(short = 'e', long = "expr", value_name = "CODE")]
        expr: Option<String>,
    },

    /// List the registered checkers
    Checkers,
}

/// Where `tokens` and `parse` read their source from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    File(PathBuf),
    Inline(String),
}

impl Input {
    fn from_args(file: Option<PathBuf>, expr: Option<String>) -> CliResult<Input> {
        match (file, expr) {
            (_, Some(code)) => Ok(Input::Inline(code)),
            (Some(file), None) => Ok(Input::File(file)),
            (None, None) => Err(CliError::usage("Error: a file path or -e \"code\" is required")),
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Some(Command::Lint { files, options }) => commands::lint_files(&files, &options),
        Some(Command::Tokens { file, expr, json }) => commands::print_tokens(&Input::from_args(file, expr)?, json),
        Some(Command::Parse { file, expr }) => commands::print_tree(&Input::from_args(file, expr)?),
        Some(Command::Checkers) => commands::list_checkers(),
        None => {
            if cli.files.is_empty() {
                return Err(CliError::usage("Error: no input files (try `rlint --help`)"));
            }
            commands::lint_files(&cli.files, &cli.options)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::lint::CheckerId;

    #[test]
    fn test_cli_parse_default_files() {
        let cli = Cli::try_parse_from(["rlint", "a.R", "b.R", "--format", "json"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.files, [PathBuf::from("a.R"), PathBuf::from("b.R")]);
        assert_eq!(cli.options.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_parse_lint() {
        let cli = Cli::try_parse_from([
            "rlint",
            "lint",
            "a.R",
            "--disable",
            "unused-result",
            "--disable",
            "null-comparison",
            "--deny-warnings",
        ])
        .unwrap();
        if let Some(Command::Lint { files, options }) = cli.command {
            assert_eq!(files, [PathBuf::from("a.R")]);
            assert_eq!(options.disable, ["unused-result", "null-comparison"]);
            assert!(options.deny_warnings);
            assert_eq!(options.format, OutputFormat::Pretty);
        } else {
            panic!("Expected Lint command");
        }
    }

    #[test]
    fn test_cli_parse_lint_requires_files() {
        assert!(Cli::try_parse_from(["rlint", "lint"]).is_err());
    }

    #[test]
    fn test_cli_parse_tokens_with_expr() {
        let cli = Cli::try_parse_from(["rlint", "tokens", "-e", "x == NULL", "--json"]).unwrap();
        if let Some(Command::Tokens { file, expr, json }) = cli.command {
            assert_eq!(file, None);
            assert_eq!(expr.as_deref(), Some("x == NULL"));
            assert!(json);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_file_conflicts_with_expr() {
        assert!(Cli::try_parse_from(["rlint", "tokens", "a.R", "-e", "1"]).is_err());
        assert!(Cli::try_parse_from(["rlint", "tokens"]).is_err());
    }

    #[test]
    fn test_cli_parse_checkers() {
        let cli = Cli::try_parse_from(["rlint", "checkers"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Checkers)));
    }

    #[test]
    fn test_options_build_config() {
        let cli = Cli::try_parse_from(["rlint", "a.R", "--disable", "scalar-ops-in-if", "--max-depth", "32"]).unwrap();
        let config = cli.options.to_config().unwrap();
        assert!(!config.is_enabled(CheckerId::ScalarOpsInIf));
        assert_eq!(config.max_nesting_depth(), 32);
    }

    #[test]
    fn test_unknown_checker_is_a_usage_error() {
        let cli = Cli::try_parse_from(["rlint", "a.R", "--disable", "bogus"]).unwrap();
        let err = cli.options.to_config().unwrap_err();
        assert_eq!(err.exit_code, ExitCode::USAGE);
        assert_eq!(err.message, "Error: unknown checker 'bogus'");
    }

    #[test]
    fn test_no_files_is_a_usage_error() {
        let cli = Cli::try_parse_from(["rlint"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::USAGE);
    }
}
