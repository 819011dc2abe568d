//! Markdown performance report.
//!
//! The report is assembled as a list of lines in memory and written in one
//! call. Composables files that cannot be read are left out of the table
//! without any console output.

use crate::analysis::composables::{count_file, ComposableCounts};
use crate::errors::Result;
use crate::io;
use crate::io::locator::display_name;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const UNSKIPPABLE_ISSUE: &str = "⚠️ Unskippable functions";
pub const NO_ISSUE: &str = "✅ Good";

const RECOMMENDATIONS: [&str; 5] = [
    "1. **Add @Stable/@Immutable annotations** to data classes used in Compose",
    "2. **Use remember() for expensive calculations** that don't need to recompute on every composition",
    "3. **Use derivedStateOf()** for computed values that depend on other state",
    "4. **Avoid lambda allocations** in frequently recomposing areas",
    "5. **Profile with Layout Inspector** to verify optimizations are working",
];

const NEXT_STEPS: [&str; 3] = [
    "- Review unskippable composables and add stability annotations",
    "- Optimize frequently recomposing components",
    "- Run this analysis again after optimizations",
];

/// One row of the composables table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub file_name: String,
    pub counts: ComposableCounts,
}

impl ReportRow {
    pub fn issues(&self) -> &'static str {
        if self.counts.has_unskippable() {
            UNSKIPPABLE_ISSUE
        } else {
            NO_ISSUE
        }
    }

    fn to_markdown(&self) -> String {
        format!(
            "| {} | {} | {} | {} | {} |",
            self.file_name,
            self.counts.skippable,
            self.counts.restartable,
            self.counts.readonly,
            self.issues()
        )
    }
}

/// Report text as an ordered list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportDocument {
    lines: Vec<String>,
}

impl ReportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined with `\n`.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

/// Rows for every readable composables file, in the order given.
pub fn collect_rows(files: &[PathBuf]) -> Vec<ReportRow> {
    files
        .iter()
        .filter_map(|path| match count_file(path) {
            Ok(counts) => Some(ReportRow {
                file_name: display_name(path),
                counts,
            }),
            Err(e) => {
                debug!("Omitting {} from report: {}", path.display(), e);
                None
            }
        })
        .collect()
}

pub fn build_report(metrics_dir: &Path, composables_files: &[PathBuf]) -> ReportDocument {
    let mut doc = ReportDocument::new();
    write_header(&mut doc, metrics_dir);
    if !composables_files.is_empty() {
        write_composables_table(&mut doc, &collect_rows(composables_files));
    }
    write_recommendations(&mut doc);
    doc
}

fn write_header(doc: &mut ReportDocument, metrics_dir: &Path) {
    doc.extend([
        "# Compose Performance Analysis Report".to_string(),
        format!("*Generated from metrics in: {}*", metrics_dir.display()),
        String::new(),
        "## Summary".to_string(),
        String::new(),
        "This report analyzes the Compose compiler metrics to identify performance optimization opportunities.".to_string(),
        String::new(),
        "## Key Metrics".to_string(),
        String::new(),
    ]);
}

// Header is written whenever files matched, even if none could be read
fn write_composables_table(doc: &mut ReportDocument, rows: &[ReportRow]) {
    doc.extend([
        "### Composable Functions",
        "",
        "| File | Skippable | Restartable | Readonly | Issues |",
        "|------|-----------|-------------|----------|--------|",
    ]);
    doc.extend(rows.iter().map(ReportRow::to_markdown));
}

fn write_recommendations(doc: &mut ReportDocument) {
    doc.extend(["", "## Recommendations", ""]);
    doc.extend(RECOMMENDATIONS);
    doc.extend(["", "## Next Steps", ""]);
    doc.extend(NEXT_STEPS);
    doc.push("");
}

/// Write `doc` to `path`, replacing any existing file.
pub fn write_report(doc: &ReportDocument, path: &Path) -> Result<()> {
    io::write_file(path, &doc.render())
}
