//! Shared helpers for integration tests.

use std::ffi::{OsStr, OsString};

/// Restores an environment variable to its previous value on drop.
///
/// Environment mutation is `unsafe` in Rust 2024; every test creating a guard
/// must run under `#[serial]` so no other test touches the environment
/// concurrently.
#[derive(Debug)]
pub struct EnvVarGuard {
    name: &'static str,
    prev: Option<OsString>,
}

impl EnvVarGuard {
    /// Set `name` to `value` until the guard drops.
    #[must_use]
    pub fn set(name: &'static str, value: impl AsRef<OsStr>) -> Self {
        let prev = std::env::var_os(name);
        // SAFETY: callers run under `#[serial]`.
        unsafe { std::env::set_var(name, value) };
        Self { name, prev }
    }

    /// Remove `name` until the guard drops.
    #[must_use]
    pub fn remove(name: &'static str) -> Self {
        let prev = std::env::var_os(name);
        // SAFETY: callers run under `#[serial]`.
        unsafe { std::env::remove_var(name) };
        Self { name, prev }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: callers run under `#[serial]`.
        unsafe {
            match self.prev.take() {
                Some(value) => std::env::set_var(self.name, value),
                None => std::env::remove_var(self.name),
            }
        }
    }
}
