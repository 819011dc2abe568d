//! Error types for metrics analysis.
//!
//! Only [`MetricsError::DirectoryNotFound`] is fatal. Every other variant is
//! raised while processing a single metric file and is reported and skipped
//! at that file's boundary.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// The metrics directory passed on the command line does not exist
    #[error("Metrics directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// A metric file could not be read
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A module file is not valid JSON
    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A module file parsed, but its top-level value is not an object
    #[error("{}: expected a JSON object", .0.display())]
    NotAnObject(PathBuf),

    /// A module metric field holds something other than a number
    #[error("{}: field `{field}` is not a number", .path.display())]
    NonNumericField { path: PathBuf, field: String },

    /// The file pattern built from the metrics directory is invalid
    #[error(transparent)]
    Pattern(#[from] glob::PatternError),
}

impl MetricsError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub fn non_numeric(path: &Path, field: &str) -> Self {
        Self::NonNumericField {
            path: path.to_path_buf(),
            field: field.to_string(),
        }
    }

    /// Whether this error aborts the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::DirectoryNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_directory_is_fatal() {
        assert!(MetricsError::DirectoryNotFound(PathBuf::from("x")).is_fatal());
        assert!(!MetricsError::NotAnObject(PathBuf::from("a-module.json")).is_fatal());
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!MetricsError::io("a-composables.txt", io).is_fatal());
    }

    #[test]
    fn test_display_names_the_file() {
        let err = MetricsError::non_numeric(Path::new("app-module.json"), "composables");
        assert_eq!(
            err.to_string(),
            "app-module.json: field `composables` is not a number"
        );
    }
}
