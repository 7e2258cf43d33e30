//! Namespace-to-path resolution
//!
//! Maps a logical namespace to the on-disk cache file holding its state.
//! Resolution is pure: no I/O happens here and the returned path is not
//! required to exist.

use std::path::{Path, PathBuf};

use crate::config::CacheConfig;
use crate::error::{Result, StateCacheError};

/// Suffix appended to every namespace's cache file name.
const STATE_FILE_SUFFIX: &str = "_state.json";

/// Resolves namespaces to cache-file paths under a fixed base directory.
///
/// Two resolvers built from equal configs produce byte-identical paths for
/// the same namespace.
#[derive(Debug, Clone)]
pub struct PathResolver {
    base_dir: PathBuf,
}

impl PathResolver {
    /// Create a resolver rooted at the config's base directory.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            base_dir: config.base_dir().to_path_buf(),
        }
    }

    /// The directory all cache files resolve under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve the cache-file path for a namespace.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNamespace` if the namespace is empty or contains a
    /// character outside `[A-Za-z0-9._-]`; no other failure is possible.
    pub fn resolve(&self, namespace: &str) -> Result<PathBuf> {
        validate_namespace(namespace)?;
        Ok(self
            .base_dir
            .join(format!("{namespace}{STATE_FILE_SUFFIX}")))
    }

    /// Recover the namespace from a cache-file name, if it is one.
    pub fn namespace_for_file_name(file_name: &str) -> Option<&str> {
        file_name
            .strip_suffix(STATE_FILE_SUFFIX)
            .filter(|ns| validate_namespace(ns).is_ok())
    }
}

fn validate_namespace(namespace: &str) -> Result<()> {
    let ok = !namespace.is_empty() && namespace.chars().all(is_namespace_char);
    if ok {
        Ok(())
    } else {
        Err(StateCacheError::InvalidNamespace {
            namespace: namespace.to_string(),
        })
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || c == '.'
}
