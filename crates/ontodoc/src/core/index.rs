//! Diagram index keyed by owning package
//!
//! Built once per run from the document's diagram list and read-only
//! afterwards. Diagrams keep the order they had in the export.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::{Diagram, Result};

/// Lookup from package id to the diagrams it owns
#[derive(Debug, Default)]
pub struct DiagramIndex<'a> {
    by_owner: HashMap<&'a str, Vec<&'a Diagram>>,
    diagram_count: usize,
}

impl<'a> DiagramIndex<'a> {
    /// Build the index from the full diagram list
    ///
    /// # Errors
    ///
    /// Returns `MalformedData` for the first diagram lacking `owner.id`.
    /// Owners are not checked against existing packages.
    pub fn build(diagrams: &'a [Diagram]) -> Result<Self> {
        let mut by_owner: HashMap<&'a str, Vec<&'a Diagram>> = HashMap::new();

        for diagram in diagrams {
            let owner = diagram.owner_id()?;
            trace!(owner, diagram = ?diagram.id, "Indexed diagram");
            by_owner.entry(owner).or_default().push(diagram);
        }

        debug!(
            diagram_count = diagrams.len(),
            owner_count = by_owner.len(),
            "Diagram index built"
        );

        Ok(Self {
            by_owner,
            diagram_count: diagrams.len(),
        })
    }

    /// Diagrams owned by the given package, in export order
    pub fn diagrams_for(&self, package_id: &str) -> &[&'a Diagram] {
        self.by_owner
            .get(package_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of indexed diagrams
    pub fn diagram_count(&self) -> usize {
        self.diagram_count
    }
}
