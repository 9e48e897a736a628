//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out temporary documentation projects with a
//! content directory and term table.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Term table used across integration tests.
pub const SAMPLE_TERMS: &str = r#"{
  "terms": [
    { "path": "alarms", "patterns": ["alarm"], "wildcard": false },
    { "path": "alarms/custom", "patterns": ["alarms/custom", "custom-alarm"], "wildcard": false },
    { "path": "resources", "patterns": ["resource", ""], "wildcard": true },
    { "path": "ghost", "patterns": [""], "wildcard": true }
  ]
}"#;

/// Creates temporary project with `content/terms.json`.
///
/// # Returns
///
/// Temporary directory acting as project root
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_test_project() -> Result<TempDir> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "content/terms.json", SAMPLE_TERMS)?;
    Ok(dir)
}

/// Writes file under root, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
