//! Common test utilities for runstate integration tests
//!
//! Provides a `CacheSandbox` that gives each test its own cache base
//! directory, plus helpers for driving the engine and the built binary
//! against it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use runstate::{CacheConfig, Document, StateStore};

/// A throwaway cache base directory for one test.
pub struct CacheSandbox {
    dir: TempDir,
}

impl CacheSandbox {
    /// Create a new empty sandbox.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The sandbox's base directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// A store rooted at the sandbox. Build several to model separate
    /// process invocations sharing one cache.
    pub fn store(&self) -> StateStore {
        StateStore::new(&CacheConfig::new(self.dir.path()))
    }

    /// Where a namespace's cache file lives inside the sandbox.
    pub fn cache_file(&self, namespace: &str) -> PathBuf {
        self.dir.path().join(format!("{namespace}_state.json"))
    }

    /// Read a namespace's cache file verbatim.
    pub fn read_raw(&self, namespace: &str) -> String {
        fs::read_to_string(self.cache_file(namespace)).expect("Failed to read cache file")
    }

    /// Overwrite a namespace's cache file with arbitrary bytes, as an
    /// external corruptor would.
    pub fn write_raw(&self, namespace: &str, contents: &str) {
        fs::write(self.cache_file(namespace), contents).expect("Failed to write cache file");
    }

    /// Run the runstate binary against the sandbox and return its output.
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_runstate"))
            .env("RUNSTATE_CACHE_DIR", self.dir.path())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
    }

    /// Run the CLI and expect success, returning stdout.
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run the CLI and expect failure, returning (exit code, stderr).
    pub fn run_cli_failure(&self, args: &[&str]) -> (Option<i32>, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            !output.status.success(),
            "CLI command {:?} should have failed",
            args
        );
        (
            output.status.code(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }
}

/// Parse a JSON object literal into a `Document`.
pub fn doc(raw: &str) -> Document {
    serde_json::from_str::<serde_json::Value>(raw)
        .expect("test document must be valid JSON")
        .as_object()
        .expect("test document must be a JSON object")
        .clone()
}
