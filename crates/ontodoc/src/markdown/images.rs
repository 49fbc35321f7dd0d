//! Image lookup by element name
//!
//! Images are never listed; for an element named `Foo` the resolver probes
//! `Foo.png`, `Foo.jpg`, `Foo.jpeg` in that order and takes the first that
//! exists. A miss is not an error.

use std::path::PathBuf;

use tracing::trace;

/// Default extension priority
pub const DEFAULT_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

/// Resolves element names to image files in an optional directory
#[derive(Debug, Clone)]
pub struct ImageResolver {
    images_dir: Option<PathBuf>,
    extensions: Vec<String>,
}

impl ImageResolver {
    /// Create a resolver over the given directory (or none)
    pub fn new(images_dir: Option<PathBuf>) -> Self {
        Self::with_extensions(
            images_dir,
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        )
    }

    /// Create a resolver with a custom extension priority list
    pub fn with_extensions(images_dir: Option<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            images_dir,
            extensions,
        }
    }

    /// Find the image for an element, if one exists
    pub fn resolve(&self, element_name: &str) -> Option<PathBuf> {
        let dir = self.images_dir.as_ref()?;

        let found = self
            .extensions
            .iter()
            .map(|ext| dir.join(format!("{}{}", element_name, ext)))
            .find(|candidate| candidate.is_file());

        trace!(element = element_name, found = ?found, "Image lookup");
        found
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(None)
    }
}
