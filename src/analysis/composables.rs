//! Marker counts for `*-composables.txt` files.
//!
//! Counts are raw, non-overlapping substring matches. `unskippable` contains
//! `skippable`, so every unskippable marker is also counted as skippable.

use super::FileOutcome;
use crate::errors::Result;
use crate::io;
use std::path::{Path, PathBuf};

pub const SKIPPABLE_MARKER: &str = "skippable";
pub const RESTARTABLE_MARKER: &str = "restartable";
pub const READONLY_MARKER: &str = "readonly";
pub const UNSKIPPABLE_MARKER: &str = "unskippable";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComposableCounts {
    pub skippable: usize,
    pub restartable: usize,
    pub readonly: usize,
    pub unskippable: usize,
}

impl ComposableCounts {
    pub fn from_text(text: &str) -> Self {
        Self {
            skippable: count_occurrences(text, SKIPPABLE_MARKER),
            restartable: count_occurrences(text, RESTARTABLE_MARKER),
            readonly: count_occurrences(text, READONLY_MARKER),
            unskippable: count_occurrences(text, UNSKIPPABLE_MARKER),
        }
    }

    pub fn has_unskippable(&self) -> bool {
        self.unskippable > 0
    }
}

/// Non-overlapping occurrences of `needle`, scanning left to right.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

pub fn count_file(path: &Path) -> Result<ComposableCounts> {
    let content = io::read_file(path)?;
    Ok(ComposableCounts::from_text(&content))
}

pub fn scan_composables(files: &[PathBuf]) -> Vec<FileOutcome<ComposableCounts>> {
    files
        .iter()
        .map(|path| FileOutcome::new(path, count_file(path)))
        .collect()
}
