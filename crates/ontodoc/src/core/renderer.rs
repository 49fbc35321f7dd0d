//! Core renderer trait for document output
//!
//! A renderer turns a loaded [`Document`] into some output format. The
//! Markdown renderer is the only one shipped, but the pipeline is written
//! against this trait.

use super::{Document, Result};

/// Core trait for document renderers
///
/// # Example
/// ```
/// use ontodoc::core::{Document, Renderer};
/// use ontodoc::markdown::MarkdownRenderer;
///
/// let document: Document = serde_json::from_str(r#"{"name": "Model"}"#).unwrap();
/// let renderer = MarkdownRenderer::new();
/// assert_eq!(renderer.render(&document).unwrap(), "# Model\n\n");
/// ```
pub trait Renderer: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the document into the output format
    fn render(&self, document: &Document) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the version of this renderer
    fn version(&self) -> &'static str;

    /// Get the supported output format
    fn format(&self) -> &'static str;
}
