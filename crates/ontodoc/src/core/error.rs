//! Core error types for documentation generation
//!
//! Every failure in the load → index → render → write pipeline is fatal and
//! surfaces as one of these variants. Missing images are not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = DocgenError> = std::result::Result<T, E>;

/// Core error types for documentation generation
#[derive(Error, Debug)]
pub enum DocgenError {
    #[error("Input not found: {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {message} at line {line}, column {column}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Malformed data: missing '{field}' in {context}")]
    MalformedData { field: String, context: String },

    #[error("Failed to write output '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DocgenError {
    /// Create a new not-found error for an input path
    pub fn not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::NotFound {
            path: path.into(),
            source,
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: String, line: usize, column: usize) -> Self {
        Self::ParseError {
            message,
            line,
            column,
        }
    }

    /// Create a new malformed-data error for a missing required field
    pub fn malformed(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MalformedData {
            field: field.into(),
            context: context.into(),
        }
    }

    /// Create a new write error for an output path
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    /// Create a new invalid-pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DocgenError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json appends the position to its message; it is carried in
        // the line and column fields instead
        let text = err.to_string();
        let suffix = format!(" at line {} column {}", err.line(), err.column());
        let message = text.strip_suffix(&suffix).unwrap_or(&text).to_string();
        Self::parse_error(message, err.line(), err.column())
    }
}
