//! Resolves metric files inside the metrics directory.

use crate::errors::{MetricsError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const COMPOSABLES_PATTERN: &str = "*-composables.txt";
pub const CLASSES_PATTERN: &str = "*-classes.txt";
pub const MODULE_PATTERN: &str = "*-module.json";

/// A metrics directory known to exist when it was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsDirectory {
    root: PathBuf,
}

impl MetricsDirectory {
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(MetricsError::DirectoryNotFound(root));
        }
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Non-recursive match of `pattern` against entries directly under the
    /// directory, in sorted path order. Unreadable entries are skipped.
    pub fn resolve(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let escaped_root = Pattern::escape(&self.root.to_string_lossy());
        let full = Path::new(&escaped_root).join(pattern);

        let mut files: Vec<PathBuf> = glob::glob(&full.to_string_lossy())?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .collect();
        files.sort();

        debug!(
            "Resolved {} file(s) for {} in {}",
            files.len(),
            pattern,
            self.root.display()
        );
        Ok(files)
    }
}

/// File name for console and report output.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
