//! Compose compiler metrics analysis.
//!
//! [`MetricsAnalyzer`] runs three independent passes over the metrics
//! directory (composables, class stability, module totals) and prints a
//! summary for each, then writes the Markdown report. A file that fails to
//! read or parse is reported under its own heading and skipped; it never
//! stops the pass or affects the totals of other files.

pub mod composables;
pub mod modules;
pub mod stability;

pub use composables::{scan_composables, ComposableCounts};
pub use modules::{scan_modules, ModuleSummary, SkippabilityVerdict};
pub use stability::{scan_stability, StabilityReport};

use crate::config::AnalyzerConfig;
use crate::errors::{MetricsError, Result};
use crate::formatting::{create_formatter, OutputFormatter, Status};
use crate::io::locator::display_name;
use crate::io::{MetricsDirectory, CLASSES_PATTERN, COMPOSABLES_PATTERN, MODULE_PATTERN};
use crate::report;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Result of processing a single metric file.
#[derive(Debug)]
pub struct FileOutcome<T> {
    pub path: PathBuf,
    pub result: Result<T>,
}

impl<T> FileOutcome<T> {
    pub fn new(path: &Path, result: Result<T>) -> Self {
        Self {
            path: path.to_path_buf(),
            result,
        }
    }

    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

pub struct MetricsAnalyzer {
    directory: MetricsDirectory,
    config: AnalyzerConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl MetricsAnalyzer {
    /// Fails with [`MetricsError::DirectoryNotFound`] when the metrics
    /// directory does not exist.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let formatter = create_formatter(config.formatting);
        Self::with_formatter(config, formatter)
    }

    pub fn with_formatter(
        config: AnalyzerConfig,
        formatter: Box<dyn OutputFormatter>,
    ) -> Result<Self> {
        let directory = MetricsDirectory::open(&config.metrics_dir)?;
        Ok(Self {
            directory,
            config,
            formatter,
        })
    }

    /// Run all three analysis passes, printing to `out`.
    pub fn analyze_metrics<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{}",
            self.formatter.header(&self.symbol("🔍", "Analyzing Compose Compiler Metrics"))
        )?;
        writeln!(out, "{}", "=".repeat(50))?;

        self.analyze_composables(out)?;
        self.analyze_stability(out)?;
        self.analyze_modules(out)?;

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.formatter.status(Status::Ok, "✅", "Analysis complete!")
        )?;
        Ok(())
    }

    fn analyze_composables<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        self.write_section(out, "📊", "Composable Function Analysis")?;

        let files = self.resolve(COMPOSABLES_PATTERN, out)?;
        if files.is_empty() {
            return self.write_no_metrics(out, "No composable metrics found");
        }

        for outcome in scan_composables(&files) {
            self.write_file_heading(out, &outcome.file_name())?;
            match &outcome.result {
                Ok(counts) => self.write_composable_counts(out, counts)?,
                Err(e) => self.write_file_error(out, e)?,
            }
        }
        Ok(())
    }

    fn write_composable_counts<W: Write>(
        &self,
        out: &mut W,
        counts: &ComposableCounts,
    ) -> std::io::Result<()> {
        let f = &self.formatter;
        let lines = [
            f.status(Status::Ok, "✅", &format!("Skippable: {}", counts.skippable)),
            f.status(Status::Info, "🔄", &format!("Restartable: {}", counts.restartable)),
            f.status(Status::Info, "📖", &format!("Readonly: {}", counts.readonly)),
        ];
        for line in &lines {
            writeln!(out, "  {line}")?;
        }

        if counts.has_unskippable() {
            writeln!(
                out,
                "  {}",
                f.status(
                    Status::Warning,
                    "⚠️",
                    &format!("Unskippable: {}", counts.unskippable)
                )
            )?;
            writeln!(out, "     Consider adding @Stable/@Immutable annotations")?;
        }
        Ok(())
    }

    fn analyze_stability<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        self.write_section(out, "🏗️", "Class Stability Analysis")?;

        let files = self.resolve(CLASSES_PATTERN, out)?;
        if files.is_empty() {
            return self.write_no_metrics(out, "No stability metrics found");
        }

        let report = scan_stability(&files);
        for outcome in &report.files {
            self.write_file_heading(out, &outcome.file_name())?;
            if let Err(e) = &outcome.result {
                self.write_file_error(out, e)?;
            }
        }

        let f = &self.formatter;
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            f.status(
                Status::Ok,
                "✅",
                &format!("Stable classes: {}", report.stable.len())
            )
        )?;
        writeln!(
            out,
            "{}",
            f.status(
                Status::Warning,
                "⚠️",
                &format!("Unstable classes: {}", report.unstable.len())
            )
        )?;

        if !report.unstable.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                f.status(
                    Status::Info,
                    "🔧",
                    "Unstable classes (consider @Stable/@Immutable):"
                )
            )?;
            let (shown, remaining) = report.unstable_preview(self.config.unstable_preview_limit);
            let bullet = self.formatter.emoji("•", "-");
            for class in shown {
                writeln!(out, "  {bullet} {class}")?;
            }
            if remaining > 0 {
                writeln!(out, "  ... and {remaining} more")?;
            }
        }
        Ok(())
    }

    fn analyze_modules<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        self.write_section(out, "🔄", "Recomposition Analysis")?;

        let files = self.resolve(MODULE_PATTERN, out)?;
        if files.is_empty() {
            return self.write_no_metrics(out, "No module metrics found");
        }

        for outcome in scan_modules(&files) {
            self.write_file_heading(out, &outcome.file_name())?;
            match &outcome.result {
                Ok(summary) => self.write_module_summary(out, summary)?,
                Err(e) => self.write_file_error(out, e)?,
            }
        }
        Ok(())
    }

    fn write_module_summary<W: Write>(
        &self,
        out: &mut W,
        summary: &ModuleSummary,
    ) -> std::io::Result<()> {
        let f = &self.formatter;

        if let Some(skippability) = &summary.skippability {
            let percentage = skippability.percentage();
            writeln!(
                out,
                "  {}",
                f.status(
                    Status::Info,
                    "📈",
                    &format!(
                        "Skippable composables: {}/{} ({:.1}%)",
                        skippability.skippable, skippability.total, percentage
                    )
                )
            )?;

            let verdict =
                modules::classify_skippability(percentage, self.config.skippability_threshold);
            let line = match verdict {
                SkippabilityVerdict::Low => f.status(
                    Status::Warning,
                    "⚠️",
                    "Low skippability - consider optimization",
                ),
                SkippabilityVerdict::Good => {
                    f.status(Status::Ok, "✅", "Good skippability rate")
                }
            };
            writeln!(out, "  {line}")?;
        }

        if let Some(restartable) = &summary.restartable {
            writeln!(
                out,
                "  {}",
                f.status(
                    Status::Info,
                    "🔄",
                    &format!("Restartable composables: {restartable}")
                )
            )?;
        }
        Ok(())
    }

    /// Write the Markdown report to the configured output path.
    ///
    /// Composables files are resolved and read again here. A write failure
    /// is printed and swallowed.
    pub fn generate_report<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let output = &self.config.output;
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            self.symbol("📝", &format!("Generating detailed report: {}", output.display()))
        )?;

        let files = match self.directory.resolve(COMPOSABLES_PATTERN) {
            Ok(files) => files,
            Err(e) => {
                warn!("Could not resolve composables for report: {}", e);
                Vec::new()
            }
        };
        let document = report::build_report(self.directory.path(), &files);

        match report::write_report(&document, output) {
            Ok(()) => writeln!(
                out,
                "{}",
                self.formatter.status(
                    Status::Ok,
                    "✅",
                    &format!("Report saved to: {}", output.display())
                )
            ),
            Err(e) => writeln!(
                out,
                "{}",
                self.formatter
                    .status(Status::Error, "❌", &format!("Failed to save report: {e}"))
            ),
        }
    }

    fn resolve<W: Write>(&self, pattern: &str, out: &mut W) -> std::io::Result<Vec<PathBuf>> {
        match self.directory.resolve(pattern) {
            Ok(files) => Ok(files),
            Err(e) => {
                self.write_file_error(out, &e)?;
                Ok(Vec::new())
            }
        }
    }

    fn symbol(&self, symbol: &str, text: &str) -> String {
        self.formatter.status(Status::Info, symbol, text)
    }

    fn write_section<W: Write>(&self, out: &mut W, symbol: &str, title: &str) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.formatter.header(&self.symbol(symbol, title)))?;
        writeln!(out, "{}", "-".repeat(30))
    }

    fn write_no_metrics<W: Write>(&self, out: &mut W, message: &str) -> std::io::Result<()> {
        debug!("{}", message);
        writeln!(out, "{}", self.formatter.status(Status::Warning, "⚠️", message))
    }

    fn write_file_heading<W: Write>(&self, out: &mut W, name: &str) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", self.symbol("📄", name))
    }

    fn write_file_error<W: Write>(&self, out: &mut W, error: &MetricsError) -> std::io::Result<()> {
        debug!("Skipping metric file: {}", error);
        writeln!(
            out,
            "  {}",
            self.formatter
                .status(Status::Error, "❌", &format!("Error reading {error}"))
        )
    }
}
