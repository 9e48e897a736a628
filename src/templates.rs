//! Template generation from markdown documents.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::markdown::{LinkRewriter, RewriteReport};
use crate::path::template_path;

/// Outcome of a template build.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Template files written, in processing order.
    pub written: Vec<PathBuf>,

    /// Link handling across all documents.
    pub report: RewriteReport,
}

/// Lists markdown documents under content root.
///
/// Matches `**/*.md` recursively and returns paths sorted so output is
/// deterministic across platforms.
///
/// # Errors
///
/// Returns error if the root is not valid UTF8 or a directory cannot be read
pub fn find_documents(content_root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let content_root = content_root.as_ref();
    let root = content_root
        .to_str()
        .context("Content path contains invalid UTF8")?;

    let pattern = format!("{}/**/*.md", glob::Pattern::escape(root));
    let entries = glob::glob(&pattern)
        .with_context(|| format!("Invalid document pattern: {}", pattern))?;

    let mut documents = Vec::new();
    for entry in entries {
        let path = entry.context("Failed to read content directory")?;
        if path.is_file() {
            documents.push(path);
        }
    }

    documents.sort();
    Ok(documents)
}

/// Rewrites one document and writes it as a template.
///
/// # Arguments
///
/// * `source`: Markdown document to read
/// * `destination`: Template file to write, parent directories are created
/// * `rewriter`: Link rewriter configured for the documentation host
///
/// # Returns
///
/// Link report for the document
///
/// # Errors
///
/// Returns error if the document cannot be read or the template written
pub fn write_template(
    source: &Path,
    destination: &Path,
    rewriter: &LinkRewriter<'_>,
) -> Result<RewriteReport> {
    let text = fs::read_to_string(source)
        .with_context(|| format!("Failed to read document: {}", source.display()))?;

    let (rewritten, report) = rewriter.rewrite_with_report(&text);

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(destination, rewritten)
        .with_context(|| format!("Failed to write template: {}", destination.display()))?;

    Ok(report)
}

/// Builds templates for every document under content root.
///
/// Each `<content>/<rel>.md` is rewritten and written to
/// `<output>/<rel>.md.tmpl`. Source documents are never modified.
///
/// # Arguments
///
/// * `content_root`: Directory holding markdown documents
/// * `output_root`: Directory receiving templates
/// * `rewriter`: Link rewriter configured for the documentation host
///
/// # Errors
///
/// Returns error on the first document that fails to read or write
pub fn build_templates(
    content_root: impl AsRef<Path>,
    output_root: impl AsRef<Path>,
    rewriter: &LinkRewriter<'_>,
) -> Result<BuildSummary> {
    let content_root = content_root.as_ref();
    let output_root = output_root.as_ref();
    let mut summary = BuildSummary::default();

    for source in find_documents(content_root)? {
        let destination = template_path(content_root, &source, output_root)?;
        let report = write_template(&source, &destination, rewriter)?;

        log::debug!(
            "{} -> {} ({} links rewritten)",
            source.display(),
            destination.display(),
            report.rewritten
        );

        for target in &report.unresolved {
            log::warn!("Unresolved term link in {}: {}", source.display(), target);
        }

        summary.report.merge(report);
        summary.written.push(destination);
    }

    Ok(summary)
}
