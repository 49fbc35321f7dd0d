//! Markdown generation for OntoUML exports
//!
//! Output shape for a package `Core` owning a diagram `View1`:
//! ```text
//! # Model
//!
//! ## Core
//!
//! Core pkg
//!
//! ![Core](images/Core.png)
//!
//! ### View1
//!
//! A view
//! ```

mod config;
mod images;
mod loader;
mod orchestrator;
mod renderer;

pub use config::RenderConfig;
pub use images::{ImageResolver, DEFAULT_EXTENSIONS};
pub use loader::{load_document, parse_document};
pub use orchestrator::{write_output, GenerationReport, Orchestrator};
pub use renderer::{heading, image_reference, join_lines, MarkdownRenderer, TOP_LEVEL_DEPTH};
