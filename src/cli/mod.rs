pub mod setup;

use crate::config::{
    AnalyzerConfig, DEFAULT_REPORT_FILE, DEFAULT_SKIPPABILITY_THRESHOLD,
    DEFAULT_UNSTABLE_PREVIEW_LIMIT,
};
use crate::formatting::FormattingConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compose-metrics")]
#[command(about = "Analyze Compose compiler metrics and write a performance report", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
#[command(after_help = "Example: compose-metrics app/build/compose_compiler")]
pub struct Cli {
    /// Directory containing the Compose compiler metrics
    pub metrics_dir: PathBuf,

    /// Markdown report destination (overwritten if present)
    #[arg(short, long, env = "COMPOSE_METRICS_REPORT", default_value = DEFAULT_REPORT_FILE)]
    pub output: PathBuf,

    /// Module skippability percentage below which a warning is printed
    #[arg(long, default_value_t = DEFAULT_SKIPPABILITY_THRESHOLD, value_parser = parse_percentage)]
    pub skippability_threshold: f64,

    /// Number of unstable classes listed before the remainder is summarised
    #[arg(long, default_value_t = DEFAULT_UNSTABLE_PREVIEW_LIMIT)]
    pub unstable_limit: usize,

    /// Plain ASCII output without colors or emoji
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Accepts a finite percentage in `0..=100`.
fn parse_percentage(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{s}` is not a number"))?;
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(format!("`{s}` must be a percentage between 0 and 100"));
    }
    Ok(value)
}

impl Cli {
    pub fn into_config(self) -> AnalyzerConfig {
        let formatting = if self.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env()
        };

        AnalyzerConfig::new(self.metrics_dir)
            .with_output(self.output)
            .with_skippability_threshold(self.skippability_threshold)
            .with_unstable_preview_limit(self.unstable_limit)
            .with_formatting(formatting)
    }
}
