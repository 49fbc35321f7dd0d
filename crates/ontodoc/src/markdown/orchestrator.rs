//! Pipeline orchestrator
//!
//! Runs a generation end to end: Loader → Diagram Index → Renderer → Writer.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, span, Level};

use super::config::RenderConfig;
use super::loader::{load_document, parse_document};
use super::renderer::MarkdownRenderer;
use crate::core::{DocgenError, Renderer, Result};

/// Summary of a completed generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub bytes_written: usize,
}

/// Coordinates loading, rendering and writing
pub struct Orchestrator {
    renderer: MarkdownRenderer,
}

impl Orchestrator {
    /// Create an orchestrator with the Markdown renderer
    pub fn new(config: RenderConfig) -> Self {
        Self::with_renderer(MarkdownRenderer::with_config(config))
    }

    /// Create an orchestrator around an existing renderer
    pub fn with_renderer(renderer: MarkdownRenderer) -> Self {
        Self { renderer }
    }

    /// Render JSON text that is already in memory
    pub fn process(&self, input: &str) -> Result<String> {
        let process_span = span!(Level::INFO, "process_document", input_len = input.len());
        let _enter = process_span.enter();

        let document = parse_document(input)?;
        self.renderer.render(&document)
    }

    /// Load a JSON export from disk and render it
    pub fn generate(&self, input: &Path) -> Result<String> {
        let generate_span = span!(Level::INFO, "generate", input = %input.display());
        let _enter = generate_span.enter();

        let document = load_document(input)?;
        let output = self.renderer.render(&document)?;
        debug!(
            renderer = self.renderer.name(),
            version = self.renderer.version(),
            format = self.renderer.format(),
            "Generation completed"
        );
        Ok(output)
    }

    /// Load, render, and write the result to `output`
    ///
    /// The output file is overwritten unconditionally.
    pub fn generate_to_file(&self, input: &Path, output: &Path) -> Result<GenerationReport> {
        let content = self.generate(input)?;
        write_output(output, &content)?;

        info!(output = %output.display(), bytes = content.len(), "Documentation written");
        Ok(GenerationReport {
            output: output.to_path_buf(),
            bytes_written: content.len(),
        })
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// Write generated text to a file, replacing any existing content
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| DocgenError::write_error(path, e))
}
