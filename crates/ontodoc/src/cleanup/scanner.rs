//! Directory scan and deletion pass

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, info, span, trace, warn, Level};
use walkdir::WalkDir;

use super::patterns::CleanupRules;
use crate::core::{DocgenError, Result};

/// Outcome of a deletion pass
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub deleted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, io::Error)>,
}

impl DeletionReport {
    pub fn deleted_count(&self) -> usize {
        self.deleted.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Walks a directory tree collecting files the rules mark for deletion
pub struct CleanupScanner {
    root: PathBuf,
    rules: CleanupRules,
}

impl CleanupScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            rules: CleanupRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: CleanupRules) -> Self {
        self.rules = rules;
        self
    }

    /// Collect deletion candidates, in file-name order per directory
    ///
    /// Unreadable entries below the root are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the root itself cannot be read.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let scan_span = span!(Level::INFO, "cleanup_scan", root = %self.root.display());
        let _enter = scan_span.enter();

        fs::metadata(&self.root).map_err(|e| DocgenError::not_found(&self.root, e))?;

        let mut candidates = Vec::new();
        let walker = WalkDir::new(&self.root).sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(path);
            if self.rules.should_delete(relative) {
                trace!(path = %path.display(), "Deletion candidate");
                candidates.push(path.to_path_buf());
            }
        }

        debug!(candidate_count = candidates.len(), "Scan completed");
        Ok(candidates)
    }
}

/// Delete every file, continuing past individual failures
pub fn delete_files(files: &[PathBuf]) -> DeletionReport {
    let delete_span = span!(Level::INFO, "cleanup_delete", file_count = files.len());
    let _enter = delete_span.enter();

    let mut report = DeletionReport::default();
    for path in files {
        match fs::remove_file(path) {
            Ok(()) => {
                trace!(path = %path.display(), "Deleted");
                report.deleted.push(path.clone());
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to delete");
                report.failed.push((path.clone(), e));
            }
        }
    }

    info!(
        deleted = report.deleted.len(),
        failed = report.failed.len(),
        "Cleanup completed"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn touch(root: &Path, relative: &str) -> PathBuf {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"x").unwrap();
        path
    }

    #[test]
    fn test_scan_finds_candidates_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let log = touch(root, "a/run.log");
        let bat = touch(root, "build.bat");
        touch(root, "scripts/keep.bat");
        touch(root, "model.json");
        let tmp = touch(root, "a/b/c/scratch.tmp");

        let mut found = CleanupScanner::new(root).scan().unwrap();
        found.sort();
        let mut expected = vec![log, bat, tmp];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_directories_are_never_candidates() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("cache.tmp")).unwrap();
        assert!(CleanupScanner::new(dir.path()).scan().unwrap().is_empty());
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = CleanupScanner::new(dir.path().join("nope")).scan().unwrap_err();
        assert!(matches!(err, DocgenError::NotFound { .. }));
    }

    #[test]
    fn test_delete_continues_past_failures() {
        let dir = tempfile::tempdir().unwrap();
        let present = touch(dir.path(), "one.tmp");
        let missing = dir.path().join("gone.tmp");

        let report = delete_files(&[missing.clone(), present.clone()]);
        assert_eq!(report.deleted, vec![present.clone()]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, missing);
        assert!(!report.is_clean());
        assert!(!present.exists());
    }
}
