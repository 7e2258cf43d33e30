//! Cache base-directory configuration
//!
//! The base directory is resolved from the environment exactly once, at
//! construction, and carried as an explicit value from then on. Nothing in
//! the engine re-reads environment variables per call.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the cache base directory.
pub const CACHE_DIR_ENV: &str = "RUNSTATE_CACHE_DIR";

/// Subdirectory of the temp root used when no override is set.
const CACHE_SUBDIR: &str = "runstate";

/// Where cache files for all namespaces live.
///
/// Construction performs no I/O; the directory is created lazily by the
/// first write that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    base_dir: PathBuf,
}

impl CacheConfig {
    /// Create a config rooted at an explicit directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve the base directory from the environment.
    ///
    /// Checks `RUNSTATE_CACHE_DIR` first, then falls back to the system
    /// temp directory (`TMPDIR` on Unix) plus a fixed `runstate`
    /// subdirectory.
    pub fn from_env() -> Self {
        if let Ok(dir) = std::env::var(CACHE_DIR_ENV) {
            if !dir.is_empty() {
                return Self::new(dir);
            }
        }
        Self::new(std::env::temp_dir().join(CACHE_SUBDIR))
    }

    /// The directory under which all cache files are stored.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}
