//! Configuration merge tests.
//!
//! These tests validate OrthoConfig layer precedence (defaults, file, env,
//! CLI) for the argsentry settings.

use crate::support::EnvVarGuard;
use anyhow::{Context, Result, ensure};
use argsentry::cli::{CONFIG_ENV_VAR, Cli, Commands, merge_with_config, parse_from};
use ortho_config::{MergeComposer, sanitize_value};
use rstest::rstest;
use serde_json::json;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[rstest]
fn merge_layers_respect_precedence() -> Result<()> {
    let mut composer = MergeComposer::new();
    composer.push_defaults(sanitize_value(&Cli::default())?);
    composer.push_file(json!({ "placeholder": "<file>", "verbose": true }), None);
    composer.push_environment(json!({ "placeholder": "<env>" }));
    let merged = Cli::merge_from_layers(composer.layers())?;
    ensure!(
        merged.placeholder() == "<env>",
        "environment layer should override the file layer",
    );
    ensure!(merged.verbose, "file layer should set verbose");

    let mut composer = MergeComposer::new();
    composer.push_defaults(sanitize_value(&Cli::default())?);
    composer.push_environment(json!({ "placeholder": "<env>" }));
    composer.push_cli(json!({ "placeholder": "<cli>" }));
    let merged = Cli::merge_from_layers(composer.layers())?;
    ensure!(
        merged.placeholder() == "<cli>",
        "CLI layer should override the environment layer",
    );
    Ok(())
}

#[rstest]
#[serial]
fn merge_with_config_reads_file_and_environment() -> Result<()> {
    let temp_dir = tempdir().context("create temporary config directory")?;
    let config_path = temp_dir.path().join("argsentry.toml");
    fs::write(&config_path, "verbose = true\nplaceholder = \"<file>\"\n")
        .context("write argsentry.toml")?;

    let _config_guard = EnvVarGuard::set(CONFIG_ENV_VAR, config_path.as_os_str());
    let _placeholder_guard = EnvVarGuard::set("ARGSENTRY_PLACEHOLDER", "<env>");
    let _verbose_guard = EnvVarGuard::remove("ARGSENTRY_VERBOSE");

    let (cli, matches) =
        parse_from(["argsentry", "check", "push", "pkg"]).context("parse CLI args for merge")?;
    let merged = merge_with_config(&cli, &matches).context("merge configuration layers")?;

    ensure!(merged.verbose, "config file should enable verbose logging");
    ensure!(
        merged.placeholder() == "<env>",
        "environment should override the config file when the CLI is silent",
    );
    ensure!(
        matches!(merged.command, Some(Commands::Check(_))),
        "subcommand must survive merging",
    );
    Ok(())
}

#[rstest]
#[serial]
fn command_line_flags_win_over_environment() -> Result<()> {
    let _config_guard = EnvVarGuard::remove(CONFIG_ENV_VAR);
    let _placeholder_guard = EnvVarGuard::set("ARGSENTRY_PLACEHOLDER", "<env>");

    let (cli, matches) = parse_from(["argsentry", "--placeholder", "<cli>", "patterns"])
        .context("parse CLI args for merge")?;
    let merged = merge_with_config(&cli, &matches).context("merge configuration layers")?;

    ensure!(merged.placeholder() == "<cli>", "CLI flag should win");
    ensure!(!merged.verbose, "verbose should stay at its default");
    Ok(())
}
