//! CLI argument definitions using clap with subcommand architecture
//!
//! The command layer is deliberately thin: it turns strings from the shell
//! into engine calls and prints the results. All cache semantics live in
//! `store`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Persistent namespaced state cache for command-line scripts
#[derive(Parser, Debug)]
#[command(name = "runstate")]
#[command(about = "Remember small pieces of state (typically counters) across process runs")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override the cache base directory
    #[arg(long, value_name = "DIR", env = "RUNSTATE_CACHE_DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for runstate
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the cache-file path a namespace resolves to
    Path(PathArgs),

    /// Print a counter field's value (absent fields read as 0)
    #[command(visible_alias = "g")]
    Get(GetArgs),

    /// Increment a counter field and print the new value
    #[command(visible_alias = "inc")]
    Incr(IncrArgs),

    /// Read or replace a namespace's whole JSON document
    Doc(DocArgs),

    /// Remove a namespace's cache file
    Clear(ClearArgs),

    /// List namespaces that currently have a cache file
    List,
}

/// Arguments for the path command
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Namespace whose cache path to resolve
    pub namespace: String,
}

/// Arguments for the get command
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Namespace holding the field
    pub namespace: String,

    /// Field name to read
    pub key: String,
}

/// Arguments for the incr command
#[derive(Args, Debug)]
pub struct IncrArgs {
    /// Namespace holding the field
    pub namespace: String,

    /// Field name to increment
    pub key: String,

    /// Amount to add (may be negative)
    #[arg(default_value_t = 1, allow_negative_numbers = true)]
    pub delta: i64,
}

/// Arguments for the doc command
#[derive(Args, Debug)]
pub struct DocArgs {
    /// Document operation to perform
    #[command(subcommand)]
    pub operation: DocOperation,
}

/// Whole-document operations
#[derive(Subcommand, Debug)]
pub enum DocOperation {
    /// Print the namespace's document, repairing corruption to the default
    Get {
        /// Namespace whose document to read
        namespace: String,

        /// Document to fall back to when the cache is absent or corrupt
        #[arg(long, value_name = "JSON", default_value = "{}")]
        default: String,
    },

    /// Replace the namespace's document with the given JSON object
    Set {
        /// Namespace whose document to replace
        namespace: String,

        /// The new document, as a JSON object
        document: String,
    },
}

/// Arguments for the clear command
#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Namespace whose cache file to remove
    pub namespace: String,
}
