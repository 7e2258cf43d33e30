//! Document store for per-namespace JSON state
//!
//! Owns the on-disk cache files: loading and validating the JSON document
//! for a namespace, repairing it when corrupted, and persisting updates
//! atomically. Field-level get/increment are built on whole-document
//! read-modify-write, so a lost update is possible when independent
//! processes race on one namespace; readers still never observe a torn
//! file.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::config::CacheConfig;
use crate::error::{Result, StateCacheError};
use crate::fs_utils;
use crate::paths::PathResolver;

/// A namespace's parsed state: field names mapped to JSON values.
///
/// Insertion-ordered (`preserve_order`), so persisted field order is
/// stable across read-modify-write cycles.
pub type Document = Map<String, Value>;

/// Store of per-namespace state documents under one base directory.
#[derive(Debug, Clone)]
pub struct StateStore {
    resolver: PathResolver,
}

impl StateStore {
    /// Create a store over the config's base directory.
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            resolver: PathResolver::new(config),
        }
    }

    /// Create a store over the environment-resolved base directory.
    pub fn from_env() -> Self {
        Self::new(&CacheConfig::from_env())
    }

    /// The cache-file path a namespace maps to. Pure; the file need not
    /// exist.
    pub fn cache_path(&self, namespace: &str) -> Result<PathBuf> {
        self.resolver.resolve(namespace)
    }

    /// Load the namespace's document, or `default` when there is none.
    ///
    /// An absent file yields `default` without creating anything on disk.
    /// A file that exists but does not parse as a JSON object is corrupt:
    /// `default` is returned and also written back, so the next reader
    /// finds a valid document again. Corruption never surfaces as an
    /// error; only a read failure other than "file absent" does.
    pub fn document_or(&self, namespace: &str, default: Document) -> Result<Document> {
        let path = self.resolver.resolve(namespace)?;

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no cache file for {}, using default", namespace);
                return Ok(default);
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(document)) => Ok(document),
            Ok(other) => self.repair(
                namespace,
                default,
                &format!("expected an object, found {}", json_type_name(&other)),
            ),
            Err(e) => self.repair(namespace, default, &e.to_string()),
        }
    }

    /// Replace the namespace's document on disk.
    ///
    /// Serializes to compact single-line JSON and writes through the
    /// atomic-rename path: concurrent readers see the old document or the
    /// new one, and a failed write leaves the old file untouched.
    pub fn set_document(&self, namespace: &str, document: &Document) -> Result<()> {
        let path = self.resolver.resolve(namespace)?;
        let contents =
            serde_json::to_string(document).map_err(|e| StateCacheError::InvalidDocument {
                message: e.to_string(),
            })?;

        fs_utils::write_atomic(&path, contents.as_bytes())?;
        tracing::debug!("persisted {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }

    /// Read a counter field. Absent and non-numeric fields read as 0.
    pub fn get(&self, namespace: &str, key: &str) -> Result<i64> {
        let document = self.document_or(namespace, Document::new())?;
        Ok(field_as_i64(&document, key))
    }

    /// Add `delta` to a counter field and persist, returning the new value.
    ///
    /// A missing field counts from 0. This is one read-modify-write cycle,
    /// not a compare-and-swap; under concurrent increments the last writer
    /// wins.
    pub fn increment(&self, namespace: &str, key: &str, delta: i64) -> Result<i64> {
        let mut document = self.document_or(namespace, Document::new())?;
        let new_value = field_as_i64(&document, key) + delta;
        document.insert(key.to_string(), Value::from(new_value));
        self.set_document(namespace, &document)?;
        Ok(new_value)
    }

    /// Remove the namespace's cache file. Removing an absent file is a
    /// no-op success.
    pub fn clear(&self, namespace: &str) -> Result<()> {
        let path = self.resolver.resolve(namespace)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Namespaces that currently have a cache file, sorted.
    pub fn namespaces(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(self.resolver.base_dir()) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut namespaces: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| {
                let name = entry.file_name();
                PathResolver::namespace_for_file_name(&name.to_string_lossy())
                    .map(|ns| ns.to_string())
            })
            .collect();
        namespaces.sort();
        Ok(namespaces)
    }

    /// Replace a corrupt document with `default`, writing it back so the
    /// file returns to a valid state. The read must still succeed when the
    /// write-back cannot.
    fn repair(&self, namespace: &str, default: Document, reason: &str) -> Result<Document> {
        tracing::warn!("repairing corrupt cache for {}: {}", namespace, reason);
        if let Err(e) = self.set_document(namespace, &default) {
            tracing::warn!("could not write repaired cache for {}: {}", namespace, e);
        }
        Ok(default)
    }
}

fn field_as_i64(document: &Document, key: &str) -> i64 {
    document.get(key).and_then(Value::as_i64).unwrap_or(0)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
