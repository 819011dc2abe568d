//! Runtime configuration for an analysis run.

use crate::formatting::FormattingConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT_FILE: &str = "compose_performance_report.md";
pub const DEFAULT_SKIPPABILITY_THRESHOLD: f64 = 80.0;
pub const DEFAULT_UNSTABLE_PREVIEW_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub metrics_dir: PathBuf,
    /// Report destination, relative to the working directory unless absolute
    pub output: PathBuf,
    /// Module skippability below this percentage is flagged
    pub skippability_threshold: f64,
    /// How many unstable classes to list before summarising the rest
    pub unstable_preview_limit: usize,
    pub formatting: FormattingConfig,
}

impl AnalyzerConfig {
    pub fn new(metrics_dir: impl AsRef<Path>) -> Self {
        Self {
            metrics_dir: metrics_dir.as_ref().to_path_buf(),
            output: PathBuf::from(DEFAULT_REPORT_FILE),
            skippability_threshold: DEFAULT_SKIPPABILITY_THRESHOLD,
            unstable_preview_limit: DEFAULT_UNSTABLE_PREVIEW_LIMIT,
            formatting: FormattingConfig::default(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_skippability_threshold(mut self, threshold: f64) -> Self {
        self.skippability_threshold = threshold;
        self
    }

    pub fn with_unstable_preview_limit(mut self, limit: usize) -> Self {
        self.unstable_preview_limit = limit;
        self
    }

    pub fn with_formatting(mut self, formatting: FormattingConfig) -> Self {
        self.formatting = formatting;
        self
    }
}
