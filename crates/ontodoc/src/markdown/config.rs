//! Rendering configuration

use std::path::{Path, PathBuf};

use super::images::{ImageResolver, DEFAULT_EXTENSIONS};

/// Options controlling Markdown generation
///
/// Image references are written as `link_base/<file name>`. When no link
/// base is set, the images directory is used exactly as supplied, so links
/// are only portable if that path is valid relative to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub images_dir: Option<PathBuf>,
    pub link_base: Option<PathBuf>,
    pub extensions: Vec<String>,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: directory probed for element images
    pub fn with_images_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.images_dir = Some(dir.into());
        self
    }

    /// Builder: prefix used in emitted image references
    pub fn with_link_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.link_base = Some(base.into());
        self
    }

    /// Builder: extension priority list
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Prefix for image references, falling back to the images directory
    pub fn link_prefix(&self) -> Option<&Path> {
        self.link_base.as_deref().or(self.images_dir.as_deref())
    }

    pub(crate) fn image_resolver(&self) -> ImageResolver {
        ImageResolver::with_extensions(self.images_dir.clone(), self.extensions.clone())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            images_dir: None,
            link_base: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}
