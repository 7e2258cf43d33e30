//! State command handlers - thin glue over the document store

use serde_json::Value;

use crate::cli::{ClearArgs, DocArgs, DocOperation, GetArgs, IncrArgs, PathArgs};
use crate::error::{Result, StateCacheError};
use crate::store::{Document, StateStore};

/// Print the cache-file path a namespace resolves to.
pub fn run_path(args: &PathArgs, store: &StateStore) -> Result<String> {
    let path = store.cache_path(&args.namespace)?;
    Ok(format!("{}\n", path.display()))
}

/// Print a counter field's value.
pub fn run_get(args: &GetArgs, store: &StateStore) -> Result<String> {
    let value = store.get(&args.namespace, &args.key)?;
    Ok(format!("{}\n", value))
}

/// Increment a counter field and print the new value.
pub fn run_incr(args: &IncrArgs, store: &StateStore) -> Result<String> {
    let value = store.increment(&args.namespace, &args.key, args.delta)?;
    Ok(format!("{}\n", value))
}

/// Read or replace a namespace's whole document.
pub fn run_doc(args: &DocArgs, store: &StateStore) -> Result<String> {
    match &args.operation {
        DocOperation::Get { namespace, default } => {
            let default = parse_document(default)?;
            let document = store.document_or(namespace, default)?;
            let rendered =
                serde_json::to_string(&document).map_err(|e| StateCacheError::InvalidDocument {
                    message: e.to_string(),
                })?;
            Ok(format!("{}\n", rendered))
        }
        DocOperation::Set {
            namespace,
            document,
        } => {
            let document = parse_document(document)?;
            store.set_document(namespace, &document)?;
            Ok(String::new())
        }
    }
}

/// Remove a namespace's cache file.
pub fn run_clear(args: &ClearArgs, store: &StateStore) -> Result<String> {
    store.clear(&args.namespace)?;
    Ok(String::new())
}

/// Print known namespaces, one per line.
pub fn run_list(store: &StateStore) -> Result<String> {
    let namespaces = store.namespaces()?;
    let mut output = String::new();
    for namespace in namespaces {
        output.push_str(&namespace);
        output.push('\n');
    }
    Ok(output)
}

/// Parse a caller-supplied document string. Anything that is not a JSON
/// object is rejected before it reaches the engine.
fn parse_document(raw: &str) -> Result<Document> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(_) => Err(StateCacheError::InvalidDocument {
            message: "expected a JSON object".to_string(),
        }),
        Err(e) => Err(StateCacheError::InvalidDocument {
            message: e.to_string(),
        }),
    }
}
