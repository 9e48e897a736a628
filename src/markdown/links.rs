//! Term reference resolution for glossary links.

use anyhow::{Context, Result};
use regex::Regex;

use crate::terms::TermTable;

/// Compiled match rules for one pattern of one term.
struct PatternRule {
    exact: Regex,
    wildcard: Option<Regex>,
    segments: usize,
}

/// Compiled rules for one referenceable term.
struct TermRule {
    path: String,
    wildcard: bool,
    patterns: Vec<PatternRule>,
}

/// Resolves term references (t/alarm, /t/alarms/custom/extra) to
/// documentation paths.
///
/// Rules are compiled once from the term table. Resolution runs an exact
/// pass over every term first, then a wildcard pass over wildcard terms.
/// Table order breaks ties within each pass.
pub struct TermResolver {
    rules: Vec<TermRule>,
}

impl TermResolver {
    /// Compiles resolver from term table.
    ///
    /// Empty patterns are ignored. Terms with no non empty pattern are
    /// excluded entirely and never match.
    ///
    /// # Arguments
    ///
    /// * `table`: Loaded term table
    ///
    /// # Errors
    ///
    /// Returns error if a pattern is not a valid regex fragment
    pub fn new(table: &TermTable) -> Result<Self> {
        let mut rules = Vec::with_capacity(table.len());

        for term in table.terms() {
            if !term.is_referenceable() {
                log::debug!("Skipping term without patterns: {}", term.path);
                continue;
            }

            let patterns = term
                .active_patterns()
                .map(|pattern| {
                    PatternRule::compile(pattern, term.wildcard).with_context(|| {
                        format!("Invalid pattern {:?} for term {}", pattern, term.path)
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            rules.push(TermRule {
                path: term.path.clone(),
                wildcard: term.wildcard,
                patterns,
            });
        }

        Ok(Self { rules })
    }

    /// Number of terms that take part in resolution.
    pub fn term_count(&self) -> usize {
        self.rules.len()
    }

    /// Resolves link target to absolute documentation path.
    ///
    /// Handles two kinds of match:
    /// - Exact: `t/alarm`, `t/alarms`, `/t/alarm` resolve to `/<path>`
    /// - Wildcard: `t/alarm/extra` resolves to `/<path>/extra` for wildcard
    ///   terms only
    ///
    /// # Arguments
    ///
    /// * `value`: Raw link target from markdown
    ///
    /// # Returns
    ///
    /// Resolved path, or `value` unchanged when no term matches
    pub fn resolve(&self, value: &str) -> String {
        self.lookup(value).unwrap_or_else(|| value.to_string())
    }

    /// Resolves link target, returning `None` when no term matches.
    pub fn lookup(&self, value: &str) -> Option<String> {
        self.exact_match(value).or_else(|| self.wildcard_match(value))
    }

    fn exact_match(&self, value: &str) -> Option<String> {
        self.rules
            .iter()
            .find(|rule| rule.patterns.iter().any(|p| p.exact.is_match(value)))
            .map(|rule| format!("/{}", rule.path))
    }

    fn wildcard_match(&self, value: &str) -> Option<String> {
        for rule in self.rules.iter().filter(|rule| rule.wildcard) {
            for pattern in &rule.patterns {
                if let Some(remainder) = pattern.match_wildcard(value) {
                    return Some(format!("/{}{}", rule.path, remainder));
                }
            }
        }

        None
    }
}

impl PatternRule {
    fn compile(pattern: &str, wildcard: bool) -> Result<Self> {
        let exact = Regex::new(&format!("^/?t/(?:{})s?$", pattern))?;
        let wildcard = if wildcard {
            Some(Regex::new(&format!(
                "^(?P<term_prefix>/?t/(?:{})s?)(?P<term_rest>/.*)?$",
                pattern
            ))?)
        } else {
            None
        };

        Ok(Self {
            exact,
            wildcard,
            segments: pattern.split('/').count(),
        })
    }

    /// Matches value against wildcard rule, returning the trailing remainder.
    ///
    /// The prefix must span exactly the `t` segment plus the pattern's own
    /// segments, so `alarm` never claims `t/alarming/foo`.
    fn match_wildcard<'v>(&self, value: &'v str) -> Option<&'v str> {
        let captures = self.wildcard.as_ref()?.captures(value)?;
        let prefix = captures.name("term_prefix")?.as_str();

        let prefix_segments = prefix.trim_start_matches('/').split('/').count();
        if prefix_segments != self.segments + 1 {
            return None;
        }

        Some(captures.name("term_rest").map_or("", |m| m.as_str()))
    }
}
