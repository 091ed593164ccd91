//! CLI module for autoclosed
//!
//! ## Commands
//!
//! - `generate <PATH>...` - Generate closed-union units for annotated types
//!
//! Debug flags (`--lex`, `--parse`, `--emit`, `--emit-model`) inspect a single file without writing anything.
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

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::backend::{Newline, RenderOptions};
use crate::config::{AttributeConfig, GeneratorConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
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
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Close annotated C# case hierarchies into exhaustively-matchable unions
#[derive(Parser, Debug)]
#[command(name = "autoclosed")]
#[command(version = VERSION)]
#[command(about = "Close annotated C# case hierarchies into exhaustively-matchable unions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", value_name = "FILE")]
    pub lex_file: Option<PathBuf>,

    /// Parse only (debug)
    #[arg(long = "parse", value_name = "FILE")]
    pub parse_file: Option<PathBuf>,

    /// Print generated units to stdout (debug)
    #[arg(long = "emit", value_name = "FILE")]
    pub emit_file: Option<PathBuf>,

    /// Print extracted models as JSON (debug)
    #[arg(long = "emit-model", value_name = "FILE")]
    pub emit_model_file: Option<PathBuf>,

    #[command(flatten)]
    pub options: GenerateOptions,
}

/// Options shared by every command that renders units.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateOptions {
    /// Line endings of generated units (`lf` or `crlf`)
    #[arg(long, value_name = "STYLE", default_value = "lf", global = true)]
    pub newline: Newline,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", default_value_t = 4, global = true)]
    pub indent: usize,

    /// Attribute name that opts a type in (repeatable; replaces the default `AutoClosed` spellings)
    #[arg(long = "attribute", value_name = "NAME", global = true)]
    pub attributes: Vec<String>,
}

impl GenerateOptions {
    /// Map CLI flags onto a generator configuration.
    pub fn to_config(&self) -> GeneratorConfig {
        let attributes = if self.attributes.is_empty() {
            AttributeConfig::default()
        } else {
            AttributeConfig::with_names(self.attributes.iter().cloned())
        };
        GeneratorConfig::new().with_attributes(attributes).with_render(
            RenderOptions::new()
                .with_newline(self.newline)
                .with_indent_width(self.indent),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate `{Name}.g.cs` units for every annotated type
    Generate {
        /// Source files or directories (searched recursively for `.cs`)
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
        /// Directory that receives the generated units
        #[arg(long = "out-dir", value_name = "DIR", default_value = "Generated")]
        out_dir: PathBuf,
        /// Verify generated units are up to date without writing
        #[arg(long)]
        check: bool,
    },
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
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.options.to_config();

    // Handle debug flags first
    if let Some(file) = cli.lex_file {
        return commands::lex_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.parse_file {
        return commands::parse_file(&file.to_string_lossy());
    }
    if let Some(file) = cli.emit_file {
        return commands::emit_file(&file.to_string_lossy(), &config);
    }
    if let Some(file) = cli.emit_model_file {
        return commands::emit_model(&file.to_string_lossy(), &config);
    }

    match cli.command {
        Some(Command::Generate { paths, out_dir, check }) => commands::generate(&paths, &out_dir, check, &config),
        // No command - show help
        None => Err(CliError::failure("No command given; run `autoclosed --help` for usage")),
    }
}

// ============================================================================
// Tests
// ============================================================================
