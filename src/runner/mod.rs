//! CLI execution and command dispatch logic.
//!
//! This module keeps `main` minimal by providing a single entry point that
//! executes a parsed [`Cli`]. Input and output streams are supplied by the
//! caller so the dispatch logic runs unchanged under test.

mod error;

pub use error::RunnerError;

use crate::cli::{Cli, Commands, InputArgs};
use crate::redaction::loggable_arguments;
use crate::sensitive::{CommandArguments, SENSITIVE_PATTERNS, contains_sensitive_arguments};
use std::io::{Read, Write};
use tracing::debug;

/// Exit status reported for any runner error.
pub const ERROR_EXIT_CODE: u8 = 2;

/// Result of a successfully executed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `check` found no sensitive pattern.
    Clean,
    /// `check` found at least one sensitive pattern.
    Sensitive,
    /// `redact` printed the loggable form of the arguments.
    Redacted,
    /// `patterns` printed the pattern set.
    Listed,
}

impl Outcome {
    /// Process exit status for this outcome.
    ///
    /// Only a sensitive `check` result is non-zero, so shell callers can
    /// branch on the status alone.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Sensitive => 1,
            Self::Clean | Self::Redacted | Self::Listed => 0,
        }
    }
}

/// Execute the parsed [`Cli`] command.
///
/// `input` is read only when `--stdin` was given. Results are written to
/// `output`, one line per command.
///
/// # Errors
///
/// Returns [`RunnerError::ReadInput`] when standard input cannot be read and
/// [`RunnerError::WriteOutput`] when the result cannot be written.
pub fn run<R, W>(cli: &Cli, input: &mut R, output: &mut W) -> Result<Outcome, RunnerError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let command = cli.command.clone().unwrap_or(Commands::Patterns);
    match command {
        Commands::Check(args) => {
            let raw = resolve_arguments(&args, input)?;
            let sensitive = contains_sensitive_arguments(raw.as_deref());
            debug!(sensitive, "checked arguments");
            let (label, outcome) = if sensitive {
                ("sensitive", Outcome::Sensitive)
            } else {
                ("clean", Outcome::Clean)
            };
            write_line(output, label)?;
            Ok(outcome)
        }
        Commands::Redact(args) => {
            let raw = resolve_arguments(&args, input)?;
            let placeholder = cli.placeholder();
            debug!(placeholder, "redacting arguments");
            write_line(output, &loggable_arguments(raw.as_deref(), placeholder))?;
            Ok(Outcome::Redacted)
        }
        Commands::Patterns => {
            for pattern in SENSITIVE_PATTERNS {
                write_line(output, &format!("{pattern:?}"))?;
            }
            Ok(Outcome::Listed)
        }
    }
}

/// Collect the argument string for `check` and `redact`.
///
/// `None` means no arguments were supplied at all.
fn resolve_arguments<R>(args: &InputArgs, input: &mut R) -> Result<Option<String>, RunnerError>
where
    R: Read + ?Sized,
{
    if args.stdin {
        let mut buf = String::new();
        input
            .read_to_string(&mut buf)
            .map_err(|source| RunnerError::ReadInput { source })?;
        return Ok(Some(strip_line_terminator(buf)));
    }
    if args.arguments.is_empty() {
        return Ok(None);
    }
    Ok(Some(CommandArguments::join(&args.arguments)))
}

/// Remove one trailing `\n` or `\r\n`.
fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn write_line<W>(output: &mut W, line: &str) -> Result<(), RunnerError>
where
    W: Write + ?Sized,
{
    writeln!(output, "{line}").map_err(|source| RunnerError::WriteOutput { source })
}
