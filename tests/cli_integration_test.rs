//! End-to-end tests for the compose-metrics binary.

use indoc::indoc;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const REPORT_FILE: &str = "compose_performance_report.md";

fn run_in(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_compose-metrics"))
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("COMPOSE_METRICS_REPORT")
        .args(args)
        .output()
        .expect("Failed to execute compose-metrics")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_single_composables_file_end_to_end() {
    let workdir = TempDir::new().unwrap();
    let metrics = workdir.path().join("compose_compiler");
    fs::create_dir(&metrics).unwrap();
    fs::write(
        metrics.join("a-composables.txt"),
        "skippable skippable unskippable",
    )
    .unwrap();

    let output = run_in(workdir.path(), &["--plain", "compose_compiler"]);
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "stdout: {stdout}");
    assert!(stdout.contains("[OK] Skippable: 3"));
    assert!(stdout.contains("[RESTART] Restartable: 0"));
    assert!(stdout.contains("[READ] Readonly: 0"));
    assert!(stdout.contains("[WARN] Unskippable: 1"));
    assert!(stdout.contains("Analysis complete!"));

    let report = fs::read_to_string(workdir.path().join(REPORT_FILE)).unwrap();
    assert!(report.contains("*Generated from metrics in: compose_compiler*"));
    assert!(report.contains("| a-composables.txt | 3 | 0 | 0 | ⚠️ Unskippable functions |"));
}

#[test]
fn test_full_metrics_directory() {
    let workdir = TempDir::new().unwrap();
    let metrics = workdir.path();
    fs::write(
        metrics.join("app_debug-composables.txt"),
        indoc! {r#"
            restartable skippable fun MediaCard(
              stable title: String
            )
            restartable fun HomeScreen(
              unstable viewModel: HomeViewModel
            )
        "#},
    )
    .unwrap();
    fs::write(
        metrics.join("app_debug-classes.txt"),
        indoc! {"
            stable class Movie {
              stable val id: Int
            }
            unstable class HomeUiState {
              unstable val rows: List<Row>
            }
            runtime class Poster {
            }
        "},
    )
    .unwrap();
    fs::write(
        metrics.join("app_debug-module.json"),
        r#"{"skippableComposables": 8, "restartableComposables": 12, "composables": 10}"#,
    )
    .unwrap();
    fs::write(metrics.join("broken-module.json"), "{ not json").unwrap();

    let output = run_in(metrics, &["--plain", "."]);
    let stdout = stdout_of(&output);

    assert!(output.status.success(), "stdout: {stdout}");
    assert!(stdout.contains("[OK] Stable classes: 1"));
    assert!(stdout.contains("[WARN] Unstable classes: 1"));
    assert!(stdout.contains("  - unstable class HomeUiState {"));
    assert!(stdout.contains("[CHART] Skippable composables: 8/10 (80.0%)"));
    assert!(stdout.contains("[OK] Good skippability rate"));
    assert!(stdout.contains("[RESTART] Restartable composables: 12"));
    assert!(stdout.contains("[FAIL] Error reading"));
    assert!(stdout.contains("[OK] Report saved to: compose_performance_report.md"));

    let report = fs::read_to_string(metrics.join(REPORT_FILE)).unwrap();
    assert!(report.contains("| app_debug-composables.txt | 1 | 2 | 0 | ✅ Good |"));
    assert!(report.contains("## Next Steps"));
}

#[test]
fn test_custom_output_path() {
    let workdir = TempDir::new().unwrap();
    let metrics = workdir.path().join("metrics");
    fs::create_dir(&metrics).unwrap();

    let output = run_in(
        workdir.path(),
        &["--plain", "metrics", "--output", "perf.md"],
    );

    assert!(output.status.success());
    assert!(workdir.path().join("perf.md").exists());
    assert!(!workdir.path().join(REPORT_FILE).exists());
}

#[test]
fn test_missing_metrics_directory_exits_non_zero() {
    let workdir = TempDir::new().unwrap();

    let output = run_in(workdir.path(), &["--plain", "does/not/exist"]);
    let stdout = stdout_of(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("[FAIL] Metrics directory not found: does/not/exist"));
    assert!(stdout.contains("./gradlew assembleDebug"));
    assert!(!stdout.contains("Analysis complete!"));
    assert!(!workdir.path().join(REPORT_FILE).exists());
}

#[test]
fn test_missing_argument_prints_usage() {
    let workdir = TempDir::new().unwrap();

    let output = run_in(workdir.path(), &[]);
    let combined = format!(
        "{}{}",
        stdout_of(&output),
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(!output.status.success());
    assert!(combined.contains("Usage:"));
    assert!(combined.contains("Example: compose-metrics app/build/compose_compiler"));
    assert!(!workdir.path().join(REPORT_FILE).exists());
}
