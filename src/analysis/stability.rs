//! Class stability records from `*-classes.txt` files.

use super::FileOutcome;
use crate::errors::Result;
use crate::io;
use std::path::{Path, PathBuf};

pub const STABLE_MARKER: &str = "stable class";
pub const UNSTABLE_MARKER: &str = "unstable class";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stability {
    Stable,
    Unstable,
}

/// Classify one trimmed line. The stable check runs first; a marker only
/// counts when it starts a word, so `unstable class` never reads as stable.
pub fn classify_line(line: &str) -> Option<Stability> {
    if contains_marker(line, STABLE_MARKER) {
        Some(Stability::Stable)
    } else if contains_marker(line, UNSTABLE_MARKER) {
        Some(Stability::Unstable)
    } else {
        None
    }
}

fn contains_marker(line: &str, marker: &str) -> bool {
    line.match_indices(marker).any(|(start, _)| {
        line[..start]
            .chars()
            .next_back()
            .is_none_or(|prev| !prev.is_alphanumeric())
    })
}

/// Stable and unstable records found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRecords {
    pub stable: Vec<String>,
    pub unstable: Vec<String>,
}

pub fn read_class_records(path: &Path) -> Result<ClassRecords> {
    let content = io::read_file(path)?;
    let mut records = ClassRecords::default();

    for line in content.lines().map(str::trim) {
        match classify_line(line) {
            Some(Stability::Stable) => records.stable.push(line.to_string()),
            Some(Stability::Unstable) => records.unstable.push(line.to_string()),
            None => {}
        }
    }

    Ok(records)
}

/// Records accumulated across every classes file, in file then line order.
#[derive(Debug, Default)]
pub struct StabilityReport {
    pub stable: Vec<String>,
    pub unstable: Vec<String>,
    /// Per-file result holding the number of records taken from that file.
    pub files: Vec<FileOutcome<usize>>,
}

impl StabilityReport {
    /// The first `limit` unstable classes and how many were left out.
    pub fn unstable_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.unstable.len().min(limit);
        (&self.unstable[..shown], self.unstable.len() - shown)
    }
}

pub fn scan_stability(files: &[PathBuf]) -> StabilityReport {
    let mut report = StabilityReport::default();

    for path in files {
        let result = read_class_records(path).map(|records| {
            let taken = records.stable.len() + records.unstable.len();
            report.stable.extend(records.stable);
            report.unstable.extend(records.unstable);
            taken
        });
        report.files.push(FileOutcome::new(path, result));
    }

    report
}
