//! CLI parsing helpers for clap value parsers.

use crate::sensitive::contains_sensitive_arguments;

/// Parse a redaction placeholder supplied via `--placeholder`.
///
/// The placeholder ends up on a single log line, so it must be non-empty,
/// free of line breaks, and must not itself look sensitive.
pub(super) fn parse_placeholder(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(String::from("placeholder must not be empty"));
    }
    if trimmed.contains(['\n', '\r']) {
        return Err(String::from("placeholder must fit on one line"));
    }
    if contains_sensitive_arguments(trimmed) {
        return Err(format!(
            "placeholder '{trimmed}' would itself be flagged as sensitive"
        ));
    }
    Ok(trimmed.to_owned())
}
