//! Ontodoc - Markdown documentation from OntoUML model exports
//!
//! Reads the JSON export of an OntoUML project and writes one Markdown page
//! describing its package hierarchy, the diagrams each package owns, and any
//! matching images found in a local directory.
//!
//! # Quick Start
//!
//! ```rust
//! use ontodoc::generate;
//!
//! let input = r#"{
//!     "name": "Model",
//!     "model": {"contents": [
//!         {"type": "Package", "id": "p1", "name": "Core", "description": "Core pkg"}
//!     ]},
//!     "diagrams": [
//!         {"id": "d1", "name": "View1", "description": "A view", "owner": {"id": "p1"}}
//!     ]
//! }"#;
//!
//! let markdown = generate(input).unwrap();
//! assert_eq!(markdown, "# Model\n\n## Core\n\nCore pkg\n\n### View1\n\nA view\n\n");
//! ```
//!
//! # Advanced Usage
//!
//! ```rust,no_run
//! use ontodoc::prelude::*;
//! use std::path::Path;
//!
//! let config = RenderConfig::new()
//!     .with_images_dir("export/images")
//!     .with_link_base("images");
//! let orchestrator = Orchestrator::new(config);
//! orchestrator
//!     .generate_to_file(Path::new("export/model.json"), Path::new("export/model.md"))
//!     .unwrap();
//! ```

pub mod cleanup;
pub mod core;
pub mod markdown;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        ContentNode, Diagram, DiagramIndex, DocgenError, Document, Package, Renderer,
    };
    pub use crate::markdown::{
        load_document, parse_document, ImageResolver, MarkdownRenderer, Orchestrator,
        RenderConfig,
    };
}

/// Render an OntoUML JSON export to Markdown without images
///
/// # Example
/// ```rust
/// let markdown = ontodoc::generate(r#"{"name": "Empty"}"#).unwrap();
/// assert_eq!(markdown, "# Empty\n\n");
/// ```
pub fn generate(input: &str) -> Result<String> {
    markdown::Orchestrator::default().process(input)
}

/// Render an OntoUML JSON export to Markdown with a specific configuration
pub fn generate_with_config(input: &str, config: markdown::RenderConfig) -> Result<String> {
    markdown::Orchestrator::new(config).process(input)
}

/// Parse an OntoUML JSON export without rendering
///
/// # Example
/// ```rust
/// let doc = ontodoc::parse(r#"{"name": "M", "diagrams": []}"#).unwrap();
/// assert_eq!(doc.name.as_deref(), Some("M"));
/// ```
pub fn parse(input: &str) -> Result<Document> {
    markdown::parse_document(input)
}
