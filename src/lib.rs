//! argsentry core library.
//!
//! Decides whether a raw command-line argument string may carry secrets
//! (passwords, API keys, user names) so that a host application can keep it
//! out of its logs. [`sensitive`] holds the detector, [`redaction`] turns its
//! verdict into log-safe text, and [`cli`] with [`runner`] back the
//! `argsentry` binary.

pub mod cli;
pub mod redaction;
pub mod runner;
pub mod sensitive;

pub use redaction::{DEFAULT_PLACEHOLDER, LoggableArguments, loggable_arguments};
pub use sensitive::{CommandArguments, SENSITIVE_PATTERNS, contains_sensitive_arguments};
