//! Filename rules for workspace cleanup

use std::path::{Component, Path};

use glob::{MatchOptions, Pattern};

use crate::core::{DocgenError, Result};

/// Filename patterns removed anywhere in the tree
pub const DEFAULT_PATTERNS: &[&str] = &[
    "*vpp.bak*",
    "*vpp.lck*",
    "~$*",
    "*.tmp",
    "*.bak",
    "*.wbk",
    "*.asd",
    "*.lnk",
    "*.lock",
    "*.log",
    "*.ds_store",
    "*.sln.docstates",
    "Thumbs.db",
    "diff.path",
    "*.del",
    "catalog-v*.xml",
];

/// Directory name under which batch files are kept
pub const PROTECTED_BATCH_DIR: &str = "scripts";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Decides which files are deletion candidates
///
/// Batch files (`*.bat`) follow their own rule: they are removed unless a
/// component of their path below the root is named `scripts`. Every other
/// file is removed when its name matches one of the patterns.
#[derive(Debug, Clone)]
pub struct CleanupRules {
    patterns: Vec<Pattern>,
}

impl CleanupRules {
    /// Rules using [`DEFAULT_PATTERNS`]
    pub fn new() -> Self {
        Self {
            patterns: DEFAULT_PATTERNS
                .iter()
                .filter_map(|p| Pattern::new(p).ok())
                .collect(),
        }
    }

    /// Rules using custom patterns
    pub fn with_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|e| DocgenError::invalid_pattern(p, e.msg))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }

    /// Whether the file at `relative_path` (relative to the scan root)
    /// should be deleted
    pub fn should_delete(&self, relative_path: &Path) -> bool {
        let Some(file_name) = relative_path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };

        if file_name.to_lowercase().ends_with(".bat") {
            return !in_protected_dir(relative_path);
        }

        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(&file_name, MATCH_OPTIONS))
    }
}

impl Default for CleanupRules {
    fn default() -> Self {
        Self::new()
    }
}

fn in_protected_dir(relative_path: &Path) -> bool {
    relative_path
        .components()
        .any(|c| matches!(c, Component::Normal(name) if name == PROTECTED_BATCH_DIR))
}
