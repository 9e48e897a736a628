//! Term table loading and validation.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Glossary concept referenced from documentation links.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Term {
    /// Canonical URL path fragment emitted for this term.
    pub path: String,

    /// Regex fragments that identify references to this term.
    pub patterns: Vec<String>,

    /// Whether references may carry a trailing path suffix.
    #[serde(default)]
    pub wildcard: bool,
}

impl Term {
    /// Returns patterns with empty entries removed.
    pub fn active_patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns
            .iter()
            .map(String::as_str)
            .filter(|pattern| !pattern.is_empty())
    }

    /// Whether the term has at least one non empty pattern.
    pub fn is_referenceable(&self) -> bool {
        self.active_patterns().next().is_some()
    }
}

/// Ordered, read only table of terms.
///
/// Loaded once at start up and handed to
/// [`TermResolver`](crate::TermResolver). Order matters: the first term
/// whose pattern matches a link wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermTable {
    terms: Vec<Term>,
}

impl TermTable {
    /// Creates table from already constructed terms.
    ///
    /// # Errors
    ///
    /// Returns error if any term has an empty path.
    pub fn new(terms: Vec<Term>) -> Result<Self> {
        let table = Self { terms };
        table.validate()?;
        Ok(table)
    }

    /// Parses table from JSON text.
    ///
    /// Expects a top level object with a `terms` array. Each element needs a
    /// string `path` and an array of string `patterns`; `wildcard` is
    /// optional and defaults to false.
    ///
    /// # Errors
    ///
    /// Returns error if the document is not valid JSON, an entry is missing
    /// required fields or has fields of the wrong type, or a path is empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(json).context("Invalid term table")?;
        table.validate()?;
        Ok(table)
    }

    /// Reads and parses table from JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or fails [`Self::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read term table: {}", path.display()))?;

        let table = Self::from_json(&json)
            .with_context(|| format!("Failed to load term table: {}", path.display()))?;

        log::debug!("Loaded {} terms from {}", table.len(), path.display());
        Ok(table)
    }

    /// Terms in table order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms, including those without patterns.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the table holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    fn validate(&self) -> Result<()> {
        for (index, term) in self.terms.iter().enumerate() {
            if term.path.trim().is_empty() {
                bail!("Term #{} has an empty path", index);
            }
        }

        Ok(())
    }
}
