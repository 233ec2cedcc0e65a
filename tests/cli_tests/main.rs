//! Unit tests for CLI argument parsing and configuration merging.
//!
//! This module exercises the command-line interface defined in
//! `argsentry::cli`.

#[path = "../support/mod.rs"]
mod support;

mod merge;
