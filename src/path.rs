//! Path utilities for template output

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Extension given to rewritten documents.
pub const TEMPLATE_EXTENSION: &str = "md.tmpl";

/// Calculates output path for a rewritten document.
///
/// Keeps the document's location relative to the content root and swaps its
/// extension for `.md.tmpl` (e.g. `content/guides/alarms.md` becomes
/// `<output>/guides/alarms.md.tmpl`).
///
/// # Arguments
///
/// * `content_root`: Root directory documents were discovered under
/// * `source`: Document path, must live under `content_root`
/// * `output_root`: Directory templates are written to
///
/// # Returns
///
/// Template file path under `output_root`
///
/// # Errors
///
/// Returns error if `source` is not under `content_root`
pub fn template_path(
    content_root: impl AsRef<Path>,
    source: impl AsRef<Path>,
    output_root: impl AsRef<Path>,
) -> Result<PathBuf> {
    let content_root = content_root.as_ref();
    let source = source.as_ref();

    let relative = source.strip_prefix(content_root).with_context(|| {
        format!(
            "Document {} is outside content root {}",
            source.display(),
            content_root.display()
        )
    })?;

    Ok(output_root
        .as_ref()
        .join(relative)
        .with_extension(TEMPLATE_EXTENSION))
}
