//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands, and merges
//! parsed flags with configuration files and `ARGSENTRY_*` environment
//! variables through `OrthoConfig`.

use clap::builder::ValueParser;
use clap::parser::ValueSource;
use clap::{ArgMatches, Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use ortho_config::declarative::LayerComposition;
use ortho_config::figment::{Figment, providers::Env};
use ortho_config::uncased::Uncased;
use ortho_config::{
    ConfigDiscovery, MergeComposer, OrthoConfig, OrthoMergeExt, OrthoResult, sanitize_value,
};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::sync::Arc;

use crate::redaction::DEFAULT_PLACEHOLDER;

mod parsing;

use parsing::parse_placeholder;

const APP_NAME: &str = "argsentry";
/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "ARGSENTRY_CONFIG_PATH";
const ENV_PREFIX: &str = "ARGSENTRY_";

/// Detect command-line argument strings that may carry secrets.
#[derive(Debug, Parser, Serialize, Deserialize, OrthoConfig)]
#[command(author, version, about, long_about = None)]
#[ortho_config(prefix = "ARGSENTRY")]
pub struct Cli {
    /// Enable verbose diagnostic logging.
    #[arg(short, long)]
    #[ortho_config(default = false)]
    pub verbose: bool,

    /// Text printed in place of arguments that may carry secrets.
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// Optional subcommand to execute; defaults to `patterns` when omitted.
    ///
    /// `OrthoConfig` merging ignores this field; CLI parsing supplies it.
    #[serde(skip)]
    #[command(subcommand)]
    #[ortho_config(skip_cli)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Apply the default command if none was specified.
    #[must_use]
    pub fn with_default_command(mut self) -> Self {
        if self.command.is_none() {
            self.command = Some(Commands::Patterns);
        }
        self
    }

    /// Return the configured placeholder, falling back to the built-in text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            verbose: false,
            placeholder: None,
            command: None,
        }
        .with_default_command()
    }
}

/// Where the argument string under inspection comes from.
#[derive(Debug, Args, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct InputArgs {
    /// Read the argument string from standard input instead of `ARGS`.
    #[arg(long, conflicts_with = "arguments")]
    #[serde(default)]
    pub stdin: bool,

    /// Argument tokens, joined with single spaces before inspection.
    ///
    /// Place them after `--` when the first token starts with a dash.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    #[serde(default)]
    pub arguments: Vec<String>,
}

/// Available top-level commands for argsentry.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum Commands {
    /// Report whether the arguments may contain sensitive values.
    ///
    /// Exits with status 1 when they do.
    Check(InputArgs),

    /// Print the arguments in the form that is safe to log.
    Redact(InputArgs),

    /// List the patterns that mark an argument string as sensitive.
    Patterns,
}

/// Parse CLI arguments from `iter`.
///
/// Returns both the parsed CLI struct and the `ArgMatches` required for
/// configuration merging.
///
/// # Errors
///
/// Returns a `clap::Error` when parsing fails, including for `--help` and
/// `--version`.
pub fn parse_from<I, T>(iter: I) -> Result<(Cli, ArgMatches), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = configure_validation_parsers(Cli::command());
    let matches = command.try_get_matches_from_mut(iter)?;
    // Clone matches before from_arg_matches_mut consumes the values.
    let matches_for_merge = matches.clone();
    let mut matches_for_parse = matches;
    let cli = Cli::from_arg_matches_mut(&mut matches_for_parse)
        .map_err(|clap_err| clap_err.with_cmd(&command))?;
    Ok((cli, matches_for_merge))
}

fn configure_validation_parsers(command: clap::Command) -> clap::Command {
    command.mut_arg("placeholder", |arg| {
        arg.value_parser(ValueParser::new(parse_placeholder))
    })
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX)
}

fn config_discovery() -> ConfigDiscovery {
    ConfigDiscovery::builder(APP_NAME)
        .env_var(CONFIG_ENV_VAR)
        .build()
}

/// The merge pipeline treats an empty JSON object as "no overrides".
fn is_empty_value(value: &serde_json::Value) -> bool {
    matches!(value, serde_json::Value::Object(map) if map.is_empty())
}

fn cli_overrides_from_matches(cli: &Cli, matches: &ArgMatches) -> OrthoResult<serde_json::Value> {
    let value = sanitize_value(cli)?;
    let mut map = match value {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(Arc::new(ortho_config::OrthoError::Validation {
                key: String::from("cli"),
                message: format!(
                    "expected parsed CLI values to serialize to an object, got {other:?}"
                ),
            }));
        }
    };

    map.remove("command");
    for field in ["verbose", "placeholder"] {
        if matches.value_source(field) != Some(ValueSource::CommandLine) {
            map.remove(field);
        }
    }

    Ok(serde_json::Value::Object(map))
}

/// Merge configuration layers over the parsed CLI values.
///
/// Precedence from lowest to highest: defaults, configuration file,
/// `ARGSENTRY_*` environment variables, flags given on the command line.
///
/// # Errors
///
/// Returns an [`ortho_config::OrthoError`] if layer composition or merging
/// fails.
pub fn merge_with_config(cli: &Cli, matches: &ArgMatches) -> OrthoResult<Cli> {
    let command = cli.command.clone();
    let mut errors = Vec::new();
    let mut composer = MergeComposer::with_capacity(4);

    match sanitize_value(&Cli::default()) {
        Ok(value) => composer.push_defaults(value),
        Err(err) => errors.push(err),
    }

    let mut file_layers = config_discovery().compose_layers();
    errors.append(&mut file_layers.required_errors);
    if file_layers.value.is_empty() {
        errors.append(&mut file_layers.optional_errors);
    }
    for layer in file_layers.value {
        composer.push_layer(layer);
    }

    let env_provider = env_provider()
        .map(|key| Uncased::new(key.as_str().to_ascii_uppercase()))
        .split("__");
    match Figment::from(env_provider)
        .extract::<serde_json::Value>()
        .into_ortho_merge()
    {
        Ok(value) => composer.push_environment(value),
        Err(err) => errors.push(err),
    }

    match cli_overrides_from_matches(cli, matches) {
        Ok(value) if !is_empty_value(&value) => composer.push_cli(value),
        Ok(_) => {}
        Err(err) => errors.push(err),
    }

    let composition = LayerComposition::new(composer.layers(), errors);
    let mut merged = composition.into_merge_result(Cli::merge_from_layers)?;
    merged.command = command;
    Ok(merged)
}
