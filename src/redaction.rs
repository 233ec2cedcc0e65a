//! Log-safe rendering of command arguments.
//!
//! When the detector flags an argument string the whole string is withheld
//! and replaced by a placeholder. Partial redaction is not attempted because
//! the detector does not say where the secret sits.

use crate::sensitive::{CommandArguments, contains_sensitive_arguments};
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, info};

/// Text logged in place of an argument string that may carry secrets.
pub const DEFAULT_PLACEHOLDER: &str = "[arguments hidden: may contain sensitive values]";

/// Return the form of `input` that may be written to a log.
///
/// # Examples
/// ```
/// use argsentry::redaction::{DEFAULT_PLACEHOLDER, loggable_arguments};
///
/// assert_eq!(loggable_arguments("install pkg", DEFAULT_PLACEHOLDER), "install pkg");
/// assert_eq!(loggable_arguments("push pkg", "***"), "***");
/// assert_eq!(loggable_arguments(None, "***"), "");
/// ```
#[must_use]
pub fn loggable_arguments<'a>(
    input: impl Into<Option<&'a str>>,
    placeholder: &'a str,
) -> Cow<'a, str> {
    let raw = input.into();
    if contains_sensitive_arguments(raw) {
        Cow::Borrowed(placeholder)
    } else {
        Cow::Borrowed(raw.unwrap_or_default())
    }
}

/// `Display` adapter applying the same rule as [`loggable_arguments`].
///
/// Suited to `tracing` field values where an intermediate `String` is not
/// wanted.
#[derive(Debug, Clone, Copy)]
pub struct LoggableArguments<'a> {
    raw: Option<&'a str>,
    placeholder: &'a str,
}

impl<'a> LoggableArguments<'a> {
    /// Build an adapter over `raw` that prints `placeholder` when sensitive.
    #[must_use]
    pub fn new(raw: impl Into<Option<&'a str>>, placeholder: &'a str) -> Self {
        Self {
            raw: raw.into(),
            placeholder,
        }
    }

    /// Return `true` when the wrapped arguments will be withheld.
    #[must_use]
    pub fn is_withheld(&self) -> bool {
        contains_sensitive_arguments(self.raw)
    }
}

impl fmt::Display for LoggableArguments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&loggable_arguments(self.raw, self.placeholder))
    }
}

/// Log a command invocation without leaking sensitive arguments.
///
/// The tokens are joined with single spaces before inspection, so flags split
/// across tokens (`-p` followed by a value) are still caught.
pub fn log_invocation<S: AsRef<str>>(program: &str, args: &[S], placeholder: &str) {
    let joined = CommandArguments::join(args);
    let shown = if contains_sensitive_arguments(joined.as_str()) {
        debug!(program, "arguments withheld from log");
        placeholder
    } else {
        joined.as_str()
    };
    info!("Running command: {program} {shown}");
}
