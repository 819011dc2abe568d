pub mod locator;

pub use locator::{MetricsDirectory, CLASSES_PATTERN, COMPOSABLES_PATTERN, MODULE_PATTERN};

use crate::errors::{MetricsError, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| MetricsError::io(path, e))
}

/// Write `content` to `path`, replacing any existing file.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| MetricsError::io(path, e))
}
