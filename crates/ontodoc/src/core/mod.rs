//! Core abstractions for documentation generation
//!
//! The data model, the diagram index, error and logging infrastructure, and
//! the renderer trait shared by every output format.

mod error;
mod index;
pub mod logging;
mod model;
mod renderer;

pub use error::*;
pub use index::*;
pub use logging::*;
pub use model::*;
pub use renderer::*;
