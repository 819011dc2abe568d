//! Module-level skippability from `*-module.json` files.

use super::FileOutcome;
use crate::errors::{MetricsError, Result};
use crate::io;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::path::{Path, PathBuf};

pub const SKIPPABLE_FIELD: &str = "skippableComposables";
pub const TOTAL_FIELD: &str = "composables";
pub const RESTARTABLE_FIELD: &str = "restartableComposables";

/// Skippable and total counts, present only when the module reports
/// `skippableComposables`. A missing total reads as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Skippability {
    pub skippable: Number,
    pub total: Number,
}

impl Skippability {
    pub fn percentage(&self) -> f64 {
        skippability_percentage(as_f64(&self.skippable), as_f64(&self.total))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleSummary {
    pub skippability: Option<Skippability>,
    pub restartable: Option<Number>,
}

/// Raw metric fields as they appear in the module file. Each field keeps
/// its JSON value (including `null`) so type checks only apply to the
/// fields actually read.
#[derive(Debug, Deserialize)]
struct RawModuleMetrics {
    #[serde(rename = "skippableComposables", default, deserialize_with = "present")]
    skippable: Option<Value>,
    #[serde(rename = "composables", default, deserialize_with = "present")]
    total: Option<Value>,
    #[serde(rename = "restartableComposables", default, deserialize_with = "present")]
    restartable: Option<Value>,
}

// A key that is present maps to Some, even when its value is null
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ModuleSummary {
    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| MetricsError::json(path, e))?;
        if !value.is_object() {
            return Err(MetricsError::NotAnObject(path.to_path_buf()));
        }
        let raw: RawModuleMetrics =
            serde_json::from_value(value).map_err(|e| MetricsError::json(path, e))?;
        Self::from_raw(path, raw)
    }

    fn from_raw(path: &Path, raw: RawModuleMetrics) -> Result<Self> {
        let skippability = match raw.skippable {
            Some(skippable) => Some(Skippability {
                skippable: number_field(path, SKIPPABLE_FIELD, skippable)?,
                total: match raw.total {
                    Some(total) => number_field(path, TOTAL_FIELD, total)?,
                    None => Number::from(0),
                },
            }),
            None => None,
        };

        let restartable = raw
            .restartable
            .map(|value| number_field(path, RESTARTABLE_FIELD, value))
            .transpose()?;

        Ok(Self {
            skippability,
            restartable,
        })
    }
}

fn number_field(path: &Path, field: &str, value: Value) -> Result<Number> {
    match value {
        Value::Number(n) => Ok(n),
        _ => Err(MetricsError::non_numeric(path, field)),
    }
}

fn as_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(0.0)
}

/// `skippable / total * 100`, or 0 when there are no composables.
pub fn skippability_percentage(skippable: f64, total: f64) -> f64 {
    if total > 0.0 {
        skippable / total * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkippabilityVerdict {
    Low,
    Good,
}

/// Strictly below `threshold` is low; exactly at it is good.
pub fn classify_skippability(percentage: f64, threshold: f64) -> SkippabilityVerdict {
    if percentage < threshold {
        SkippabilityVerdict::Low
    } else {
        SkippabilityVerdict::Good
    }
}

pub fn read_module_summary(path: &Path) -> Result<ModuleSummary> {
    let content = io::read_file(path)?;
    ModuleSummary::from_json(path, &content)
}

pub fn scan_modules(files: &[PathBuf]) -> Vec<FileOutcome<ModuleSummary>> {
    files
        .iter()
        .map(|path| FileOutcome::new(path, read_module_summary(path)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn summary(text: &str) -> Result<ModuleSummary> {
        ModuleSummary::from_json(Path::new("app-module.json"), text)
    }

    #[test]
    fn test_exact_threshold_is_good() {
        let summary = summary(r#"{"skippableComposables": 8, "composables": 10}"#).unwrap();
        let pct = summary.skippability.unwrap().percentage();

        assert_eq!(pct, 80.0);
        assert_eq!(classify_skippability(pct, 80.0), SkippabilityVerdict::Good);
    }

    #[test]
    fn test_below_threshold_is_low() {
        let summary = summary(r#"{"skippableComposables": 79, "composables": 100}"#).unwrap();
        let pct = summary.skippability.unwrap().percentage();
        assert_eq!(classify_skippability(pct, 80.0), SkippabilityVerdict::Low);
    }

    #[test]
    fn test_zero_total_yields_zero_percent() {
        let summary = summary(r#"{"skippableComposables": 0, "composables": 0}"#).unwrap();
        assert_eq!(summary.skippability.unwrap().percentage(), 0.0);
        assert_eq!(skippability_percentage(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_missing_total_defaults_to_zero() {
        let summary = summary(r#"{"skippableComposables": 4}"#).unwrap();
        let skippability = summary.skippability.unwrap();

        assert_eq!(skippability.total, Number::from(0));
        assert_eq!(skippability.percentage(), 0.0);
    }

    #[test]
    fn test_restartable_read_independently() {
        let summary = summary(r#"{"restartableComposables": 12, "composables": "n/a"}"#).unwrap();

        assert!(summary.skippability.is_none());
        assert_eq!(summary.restartable, Some(Number::from(12)));
    }

    #[test]
    fn test_null_skippable_is_present_but_not_numeric() {
        assert!(matches!(
            summary(r#"{"skippableComposables": null}"#),
            Err(MetricsError::NonNumericField { field, .. }) if field == SKIPPABLE_FIELD
        ));
        assert!(matches!(
            summary(r#"{"restartableComposables": "12"}"#),
            Err(MetricsError::NonNumericField { field, .. }) if field == RESTARTABLE_FIELD
        ));
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let summary = summary(r#"{"name": "app", "skippableComposables": 2.5, "composables": 5}"#)
            .unwrap();
        assert_eq!(summary.skippability.unwrap().percentage(), 50.0);
    }

    #[test]
    fn test_absent_fields_are_not_an_error() {
        assert_eq!(summary("{}").unwrap(), ModuleSummary::default());
    }

    #[test]
    fn test_invalid_documents_are_errors() {
        assert!(matches!(summary("{"), Err(MetricsError::Json { .. })));
        assert!(matches!(summary("[1, 2]"), Err(MetricsError::NotAnObject(_))));
        assert!(matches!(
            summary(r#"{"skippableComposables": 3, "composables": null}"#),
            Err(MetricsError::NonNumericField { field, .. }) if field == TOTAL_FIELD
        ));
    }

    #[test]
    fn test_scan_continues_past_malformed_json() {
        let temp = TempDir::new().unwrap();
        let broken = temp.path().join("a-module.json");
        let valid = temp.path().join("b-module.json");
        fs::write(&broken, "not json").unwrap();
        fs::write(&valid, r#"{"skippableComposables": 9, "composables": 10}"#).unwrap();

        let outcomes = scan_modules(&[broken, valid]);

        assert!(outcomes[0].result.is_err());
        let pct = outcomes[1]
            .result
            .as_ref()
            .unwrap()
            .skippability
            .as_ref()
            .unwrap()
            .percentage();
        assert!((pct - 90.0).abs() < f64::EPSILON);
    }
}
