//! runstate: persistent namespaced state cache
//!
//! Gives short-lived command-line invocations a way to remember and update
//! small pieces of state (typically counters) across separate process
//! runs. Each namespace maps to one JSON document on disk; the cache file
//! is the only continuity mechanism between runs.
//!
//! Reads are self-healing: a cache file holding invalid JSON is replaced
//! by a caller-supplied default instead of failing the read. Writes go
//! through an atomic rename, so a concurrent reader never observes a
//! partially-written file. Increments are plain read-modify-write cycles;
//! racing writers on one namespace lose updates rather than corrupt state.
//!
//! # Example
//!
//! ```no_run
//! use runstate::{CacheConfig, StateStore};
//!
//! fn main() -> runstate::Result<()> {
//!     let store = StateStore::new(&CacheConfig::from_env());
//!
//!     store.increment("deploy", "runs", 1)?;
//!     let runs = store.get("deploy", "runs")?;
//!     println!("deploys so far: {}", runs);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod paths;
pub mod store;

// Re-export commonly used types
pub use cli::{Cli, Commands};
pub use config::CacheConfig;
pub use error::{Result, StateCacheError};
pub use paths::PathResolver;
pub use store::{Document, StateStore};
