//! Markdown renderer
//!
//! Walks the package tree depth-first and emits one heading per package,
//! followed by its description, its image, its diagrams, and finally its
//! sub-packages one heading level deeper. Heading depth is not capped.

use std::path::Path;

use tracing::{debug, info, span, trace, Level};

use super::config::RenderConfig;
use super::images::ImageResolver;
use crate::core::{ContentNode, DiagramIndex, DocgenError, Document, Package, Renderer, Result};

/// Heading level of top-level packages
pub const TOP_LEVEL_DEPTH: usize = 2;

/// Renders a document as a single Markdown page
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    config: RenderConfig,
    resolver: ImageResolver,
}

impl MarkdownRenderer {
    /// Create a renderer with default settings (no images)
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a renderer with a specific configuration
    pub fn with_config(config: RenderConfig) -> Self {
        let resolver = config.image_resolver();
        Self { config, resolver }
    }

    /// Render the document into lines, without joining them
    pub fn render_lines(&self, document: &Document) -> Result<Vec<String>> {
        let title = document.title()?;
        let mut lines = vec![heading(1, title), String::new()];

        let index = DiagramIndex::build(&document.diagrams)?;
        let rendered = self.render_contents(
            document.model_contents(),
            None,
            &index,
            TOP_LEVEL_DEPTH,
            &mut lines,
        )?;

        let skipped = index.diagram_count().saturating_sub(rendered);
        if skipped > 0 {
            debug!(skipped, "Diagrams without a rendered owner package were left out");
        }

        Ok(lines)
    }

    /// Render a package subtree starting at the given heading depth
    pub fn render_package(
        &self,
        package: &Package,
        index: &DiagramIndex<'_>,
        depth: usize,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        self.render_package_body(package, index, depth, lines)?;
        self.render_contents(
            &package.contents,
            package.id.as_deref(),
            index,
            depth + 1,
            lines,
        )?;
        Ok(())
    }

    /// Render every package among `contents`, depth-first, in order
    ///
    /// Uses an explicit stack so that deeply nested models do not grow the
    /// call stack. Returns the number of diagrams emitted.
    fn render_contents(
        &self,
        contents: &[ContentNode],
        parent_id: Option<&str>,
        index: &DiagramIndex<'_>,
        depth: usize,
        lines: &mut Vec<String>,
    ) -> Result<usize> {
        let mut diagrams = 0;
        let mut stack: Vec<(&ContentNode, Option<&str>, usize)> = contents
            .iter()
            .rev()
            .map(|content| (content, parent_id, depth))
            .collect();

        while let Some((content, parent, depth)) = stack.pop() {
            match content {
                ContentNode::Package(package) => {
                    diagrams += self.render_package_body(package, index, depth, lines)?;
                    let id = package.id.as_deref();
                    stack.extend(
                        package
                            .contents
                            .iter()
                            .rev()
                            .map(|child| (child, id, depth + 1)),
                    );
                }
                ContentNode::Other { kind } => {
                    trace!(kind = kind.as_str(), "Skipping non-package content");
                }
                ContentNode::Untyped => {
                    let context = match parent {
                        Some(id) => format!("content of package '{}'", id),
                        None => "model contents".to_string(),
                    };
                    return Err(DocgenError::malformed("type", context));
                }
            }
        }

        Ok(diagrams)
    }

    /// Emit a single package: heading, description, image, owned diagrams
    fn render_package_body(
        &self,
        package: &Package,
        index: &DiagramIndex<'_>,
        depth: usize,
        lines: &mut Vec<String>,
    ) -> Result<usize> {
        let name = package.require_name()?;
        let id = package.require_id()?;
        trace!(id, name, depth, "Rendering package");

        lines.push(heading(depth, name));
        lines.push(String::new());

        if let Some(description) = package.description() {
            lines.push(description.to_string());
            lines.push(String::new());
        }

        self.push_image(name, lines);

        let owned = index.diagrams_for(id);
        for diagram in owned {
            let diagram_name = diagram.require_name()?;
            trace!(package = id, diagram = diagram_name, "Rendering diagram");

            lines.push(heading(depth + 1, diagram_name));
            lines.push(String::new());
            lines.push(diagram.description().to_string());
            lines.push(String::new());

            self.push_image(diagram_name, lines);
        }

        Ok(owned.len())
    }

    fn push_image(&self, element_name: &str, lines: &mut Vec<String>) {
        let Some(found) = self.resolver.resolve(element_name) else {
            return;
        };
        let Some(file_name) = found.file_name() else {
            return;
        };
        let target = match self.config.link_prefix() {
            Some(prefix) => prefix.join(file_name),
            None => found.clone(),
        };
        lines.push(image_reference(element_name, &target));
        lines.push(String::new());
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarkdownRenderer {
    type Output = String;

    fn render(&self, document: &Document) -> Result<String> {
        let render_span = span!(Level::INFO, "render_markdown");
        let _enter = render_span.enter();

        let lines = self.render_lines(document)?;
        debug!(line_count = lines.len(), "Rendering completed");

        let output = join_lines(&lines);
        info!(output_len = output.len(), "Markdown generated");
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "markdown"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "md"
    }
}

/// A Markdown ATX heading at the given level
pub fn heading(level: usize, text: &str) -> String {
    format!("{} {}", "#".repeat(level), text)
}

/// A Markdown image reference
///
/// Destinations containing whitespace are wrapped in angle brackets so the
/// link stays valid CommonMark.
pub fn image_reference(alt: &str, target: &Path) -> String {
    let target = link_target(target);
    if target.chars().any(char::is_whitespace) {
        format!("![{}](<{}>)", alt, target)
    } else {
        format!("![{}]({})", alt, target)
    }
}

fn link_target(path: &Path) -> String {
    let target = path.to_string_lossy();
    if cfg!(windows) {
        target.replace('\\', "/")
    } else {
        target.into_owned()
    }
}

/// Terminate every line with `\n` and concatenate
pub fn join_lines(lines: &[String]) -> String {
    let capacity = lines.iter().map(|l| l.len() + 1).sum();
    let mut output = String::with_capacity(capacity);
    for line in lines {
        output.push_str(line);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Diagram;
    use std::fs;
    use std::path::PathBuf;

    fn document(contents: Vec<ContentNode>, diagrams: Vec<Diagram>) -> Document {
        let mut root = Package::default();
        root.contents = contents;
        Document {
            name: Some("Model".to_string()),
            model: Some(root),
            diagrams,
        }
    }

    #[test]
    fn test_title_only() {
        let doc = document(vec![], vec![]);
        let output = MarkdownRenderer::new().render(&doc).unwrap();
        assert_eq!(output, "# Model\n\n");
    }

    #[test]
    fn test_package_with_diagram() {
        let doc = document(
            vec![Package::new("p1", "Core")
                .with_description("Core pkg")
                .into()],
            vec![Diagram::new("d1", "View1", "p1").with_description("A view")],
        );
        let output = MarkdownRenderer::new().render(&doc).unwrap();
        assert_eq!(
            output,
            "# Model\n\n## Core\n\nCore pkg\n\n### View1\n\nA view\n\n"
        );
    }

    #[test]
    fn test_diagram_without_description_keeps_blank_paragraph() {
        let doc = document(
            vec![Package::new("p1", "Core").into()],
            vec![Diagram::new("d1", "View1", "p1")],
        );
        let lines = MarkdownRenderer::new().render_lines(&doc).unwrap();
        assert_eq!(lines, vec!["# Model", "", "## Core", "", "### View1", "", "", ""]);
    }

    #[test]
    fn test_nested_depth_increases() {
        let doc = document(
            vec![Package::new("p1", "A")
                .with_content(
                    Package::new("p2", "B")
                        .with_content(Package::new("p3", "C").into())
                        .into(),
                )
                .with_content(Package::new("p4", "D").into())
                .into()],
            vec![],
        );
        let lines = MarkdownRenderer::new().render_lines(&doc).unwrap();
        let headings: Vec<_> = lines.iter().filter(|l| l.starts_with('#')).collect();
        assert_eq!(headings, vec!["# Model", "## A", "### B", "#### C", "### D"]);
    }

    #[test]
    fn test_render_package_at_depth() {
        let pkg = Package::new("p1", "A").with_content(Package::new("p2", "B").into());
        let index = DiagramIndex::default();
        let mut lines = Vec::new();
        MarkdownRenderer::new()
            .render_package(&pkg, &index, 4, &mut lines)
            .unwrap();
        assert_eq!(lines, vec!["#### A", "", "##### B", ""]);
    }

    #[test]
    fn test_untyped_child_is_malformed() {
        let doc = document(
            vec![Package::new("p1", "A")
                .with_content(ContentNode::Untyped)
                .into()],
            vec![],
        );
        let err = MarkdownRenderer::new().render(&doc).unwrap_err();
        assert!(err.to_string().contains("content of package 'p1'"));
    }

    #[test]
    fn test_image_lines() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Core.png"), b"").unwrap();
        fs::write(dir.path().join("View1.jpeg"), b"").unwrap();

        let doc = document(
            vec![Package::new("p1", "Core").into()],
            vec![Diagram::new("d1", "View1", "p1")],
        );
        let config = RenderConfig::new()
            .with_images_dir(dir.path())
            .with_link_base("images");
        let lines = MarkdownRenderer::with_config(config)
            .render_lines(&doc)
            .unwrap();

        assert!(lines.contains(&"![Core](images/Core.png)".to_string()));
        assert!(lines.contains(&"![View1](images/View1.jpeg)".to_string()));
    }

    #[test]
    fn test_image_reference_with_spaces() {
        let line = image_reference("My Package", &PathBuf::from("img/My Package.png"));
        assert_eq!(line, "![My Package](<img/My Package.png>)");
    }

    #[test]
    fn test_join_lines_terminates_each_line() {
        let lines = vec!["# T".to_string(), String::new()];
        assert_eq!(join_lines(&lines), "# T\n\n");
        assert_eq!(join_lines(&[]), "");
    }
}
