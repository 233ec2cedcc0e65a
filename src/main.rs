//! Application entry point.
//!
//! Parses command-line arguments, layers configuration over them, and
//! delegates execution to [`runner::run`].

use argsentry::{cli, redaction, runner};
use std::ffi::OsString;
use std::io;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;

fn main() -> ExitCode {
    // Non-UTF-8 arguments reach clap, which rejects them as a usage error.
    let args: Vec<OsString> = std::env::args_os().collect();
    let (parsed, matches) = match cli::parse_from(&args) {
        Ok(parsed) => parsed,
        // Covers --help and --version as well as usage errors.
        Err(err) => err.exit(),
    };
    let merged = cli::merge_with_config(&parsed, &matches);
    let max_level = match &merged {
        Ok(merged_cli) if merged_cli.verbose => Level::DEBUG,
        Ok(_) => Level::ERROR,
        Err(_) if parsed.verbose => Level::DEBUG,
        Err(_) => Level::ERROR,
    };
    fmt().with_writer(io::stderr).with_max_level(max_level).init();

    let cli = match merged {
        Ok(merged_cli) => merged_cli.with_default_command(),
        Err(err) => {
            tracing::error!(error = %err, "configuration merge failed");
            return ExitCode::from(runner::ERROR_EXIT_CODE);
        }
    };

    let invocation_args: Vec<String> = args
        .iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    redaction::log_invocation(env!("CARGO_PKG_NAME"), &invocation_args, cli.placeholder());

    match runner::run(&cli, &mut io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(err) => {
            tracing::error!(error = %err, "runner failed");
            ExitCode::from(runner::ERROR_EXIT_CODE)
        }
    }
}
