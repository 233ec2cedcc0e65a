//! Error types for the runner module.
//!
//! Kept in a submodule so the derive-macro lint suppression below stays
//! narrowly scoped.

// `unused_assignments` fires on thiserror/miette derive expansion in some Rust
// versions only, so `#[expect]` cannot be used here.
// FIXME(rust-lang/rust#130021): remove once upstream is fixed.
#![allow(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    unused_assignments
)]

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Errors raised while executing a command.
#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    /// Standard input could not be read or was not valid UTF-8.
    #[error("failed to read arguments from standard input")]
    #[diagnostic(
        code(argsentry::runner::read_input),
        help("pipe UTF-8 text into `--stdin`, or pass the arguments directly")
    )]
    ReadInput {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The result could not be written to standard output.
    #[error("failed to write output")]
    #[diagnostic(code(argsentry::runner::write_output))]
    WriteOutput {
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
