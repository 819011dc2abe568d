use anyhow::Result;
use clap::Parser;
use compose_metrics::cli::{setup, Cli};
use compose_metrics::formatting::{create_formatter, OutputFormatter, Status};
use compose_metrics::{MetricsAnalyzer, MetricsError};
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup::init_logging(cli.verbosity);

    let config = cli.into_config();
    let formatter = create_formatter(config.formatting);

    let analyzer = match MetricsAnalyzer::new(config) {
        Ok(analyzer) => analyzer,
        Err(e) if e.is_fatal() => exit_missing_metrics(formatter.as_ref(), &e),
        Err(e) => return Err(e.into()),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    analyzer.analyze_metrics(&mut out)?;
    analyzer.generate_report(&mut out)?;
    out.flush()?;
    Ok(())
}

// Side effect handler: nothing is analyzed or written without metrics
fn exit_missing_metrics(formatter: &dyn OutputFormatter, error: &MetricsError) -> ! {
    println!("{}", formatter.status(Status::Error, "❌", &error.to_string()));
    println!(
        "{}",
        formatter.status(
            Status::Info,
            "🏗️",
            "Run './gradlew assembleDebug' first to generate metrics"
        )
    );
    std::process::exit(1);
}
