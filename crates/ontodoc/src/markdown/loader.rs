//! JSON loader for OntoUML exports
//!
//! Reads the export from disk and parses it into a [`Document`]. Only
//! syntactic validity is checked here; required keys are checked where they
//! are used.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, span, Level};

use crate::core::{DocgenError, Document, Result};

/// Load a document from a JSON file
///
/// # Errors
///
/// * `NotFound` if the path does not exist or cannot be read
/// * `ParseError` if the content is not valid JSON of the expected shape
pub fn load_document(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let load_span = span!(Level::INFO, "load_document", path = %path.display());
    let _enter = load_span.enter();

    let content = fs::read_to_string(path).map_err(|e| DocgenError::not_found(path, e))?;
    debug!(bytes = content.len(), "Read input file");

    let document = parse_document(&content)?;
    info!(
        diagram_count = document.diagrams.len(),
        "Document loaded"
    );
    Ok(document)
}

/// Parse a document from JSON text
///
/// Nesting depth is not limited; deep input grows the stack on the heap
/// instead of overflowing it.
pub fn parse_document(content: &str) -> Result<Document> {
    let mut json = serde_json::Deserializer::from_str(content);
    json.disable_recursion_limit();
    let document = Document::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(document)
}
