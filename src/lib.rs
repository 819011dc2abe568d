// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod report;

// Re-export commonly used types
pub use crate::analysis::{
    scan_composables, scan_modules, scan_stability, ComposableCounts, FileOutcome,
    MetricsAnalyzer, ModuleSummary, SkippabilityVerdict, StabilityReport,
};
pub use crate::config::AnalyzerConfig;
pub use crate::errors::MetricsError;
pub use crate::io::MetricsDirectory;
pub use crate::report::{build_report, write_report, ReportDocument};
