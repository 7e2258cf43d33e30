//! Command handlers for the runstate CLI
//!
//! Each handler maps a parsed argument struct onto engine calls and
//! returns the text to print. Handlers never touch the filesystem
//! directly; everything goes through the shared `StateStore`.

pub mod state;

pub use state::{run_clear, run_doc, run_get, run_incr, run_list, run_path};
