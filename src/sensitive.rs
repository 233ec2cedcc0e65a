//! Sensitive argument detection.
//!
//! Decides whether a raw, unparsed argument string may carry a secret (a
//! password, API key, or user name) and therefore must not be written to a
//! log verbatim. Matching is a plain case-sensitive substring search against
//! [`SENSITIVE_PATTERNS`]; it does not tokenise the input.
//!
//! Both single and double dash forms are caught because every flag pattern
//! starts with one `-`. Forms the list does not spell out are missed, for
//! example `apikey=ABC123` (only `apikey ` with a trailing space is listed).

/// Flag names and fragments whose presence implies secret-bearing content.
///
/// Short flags carry an explicit separator (`-p ` and `-p=`) so that an
/// unrelated token such as `-pre` is not flagged.
pub const SENSITIVE_PATTERNS: [&str; 21] = [
    "-install-arguments-sensitive",
    "-package-parameters-sensitive",
    "apikey ",
    "config ",
    // `push` with no parameters carries nothing secret and is fine to log.
    "push ",
    "-p ",
    "-p=",
    "-password",
    "-cp ",
    "-cp=",
    "-certpassword",
    "-k ",
    "-k=",
    "-key ",
    "-key=",
    "-apikey",
    "-api-key",
    "-u ",
    "-u=",
    "-user ",
    "-user=",
];

/// Borrowed view of the raw argument portion of a command invocation.
///
/// # Examples
/// ```
/// use argsentry::sensitive::CommandArguments;
///
/// let joined = CommandArguments::join(&["push", "mypackage"]);
/// assert!(CommandArguments::new(&joined).is_sensitive());
/// assert!(!CommandArguments::new("install mypackage").is_sensitive());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandArguments<'a>(&'a str);

impl<'a> CommandArguments<'a> {
    /// Wrap a raw argument string.
    #[must_use]
    pub const fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    /// Borrow the underlying argument string.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    /// Join argv tokens with single spaces, the form the detector inspects.
    #[must_use]
    pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
        let mut joined = String::new();
        for (idx, token) in tokens.iter().enumerate() {
            if idx > 0 {
                joined.push(' ');
            }
            joined.push_str(token.as_ref());
        }
        joined
    }

    /// Return `true` when the arguments may contain sensitive values.
    #[must_use]
    pub fn is_sensitive(&self) -> bool {
        contains_sensitive_arguments(self.0)
    }
}

impl<'a> From<CommandArguments<'a>> for Option<&'a str> {
    fn from(args: CommandArguments<'a>) -> Self {
        Some(args.0)
    }
}

/// Check whether `input` contains any of the [`SENSITIVE_PATTERNS`].
///
/// Absent input contains nothing and yields `false`, as does an empty
/// string. The function is total: it never fails and has no side effects.
/// It reports detection only, not which pattern matched.
///
/// # Examples
/// ```
/// use argsentry::sensitive::contains_sensitive_arguments;
///
/// assert!(contains_sensitive_arguments("push mypackage --source=nuget.org"));
/// assert!(contains_sensitive_arguments("apikey ABC123"));
/// assert!(!contains_sensitive_arguments("apikey=ABC123"));
/// assert!(!contains_sensitive_arguments("install mypackage -version 1.0.0"));
/// assert!(!contains_sensitive_arguments(None));
/// ```
#[must_use]
pub fn contains_sensitive_arguments<'a>(input: impl Into<Option<&'a str>>) -> bool {
    let haystack = input.into().unwrap_or_default();
    SENSITIVE_PATTERNS
        .iter()
        .any(|pattern| haystack.contains(pattern))
}

/// Older name for [`contains_sensitive_arguments`].
#[deprecated(since = "0.1.0", note = "use `contains_sensitive_arguments` instead")]
#[must_use]
pub fn arguments_contain_sensitive_information<'a>(input: impl Into<Option<&'a str>>) -> bool {
    contains_sensitive_arguments(input)
}
