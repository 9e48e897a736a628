//! Markdown link rewriting against the documentation host.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::TermResolver;

/// Inline markdown link: `[text](target)`, text may nest one level of
/// balanced brackets (`[`args[0]`](t/arg)`).
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[((?:[^\[\]\n]|\[[^\[\]\n]*\])+)\]\(([^)\n]+)\)")
        .expect("link regex is valid")
});

/// Leading URL scheme such as `https:` or `mailto:`.
static SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("scheme regex is valid")
});

/// Tally of link handling for one or more documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Links pointed at the documentation host.
    pub rewritten: usize,

    /// Links left alone because they already carry a URL scheme.
    pub external: usize,

    /// Unresolved links left alone because they are not rooted at `/`.
    pub relative: usize,

    /// Term references (`t/...`) that no term matched.
    pub unresolved: Vec<String>,
}

impl RewriteReport {
    /// Folds another report into this one.
    pub fn merge(&mut self, other: RewriteReport) {
        self.rewritten += other.rewritten;
        self.external += other.external;
        self.relative += other.relative;
        self.unresolved.extend(other.unresolved);
    }
}

/// Rewrites relative markdown links into absolute documentation URLs.
///
/// Every link whose target has no URL scheme becomes
/// `[text](<base_url><resolved>)`, where `resolved` comes from the
/// [`TermResolver`]. An unmatched target keeps its value and is only
/// prefixed when rooted at `/`; relative targets like `./setup.md` stay
/// intact. Targets with a scheme are left as is, so rewriting an already
/// rewritten document changes nothing.
pub struct LinkRewriter<'r> {
    resolver: &'r TermResolver,
    base_url: String,
}

impl<'r> LinkRewriter<'r> {
    /// Creates rewriter for documentation host.
    ///
    /// # Arguments
    ///
    /// * `resolver`: Compiled term resolver
    /// * `base_url`: Documentation host, trailing slashes are trimmed
    pub fn new(resolver: &'r TermResolver, base_url: impl AsRef<str>) -> Self {
        Self {
            resolver,
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rewrites all eligible links in document text.
    pub fn rewrite(&self, text: &str) -> String {
        self.rewrite_with_report(text).0
    }

    /// Rewrites all eligible links and reports what was done.
    ///
    /// # Returns
    ///
    /// Rewritten text and the link tally
    pub fn rewrite_with_report(&self, text: &str) -> (String, RewriteReport) {
        let mut report = RewriteReport::default();

        let output = LINK.replace_all(text, |caps: &Captures<'_>| {
            let label = &caps[1];
            let target = &caps[2];

            if SCHEME.is_match(target) {
                report.external += 1;
                return caps[0].to_string();
            }

            let resolved = self.resolver.lookup(target);
            if resolved.is_none() && is_term_reference(target) {
                report.unresolved.push(target.to_string());
            }

            let path = resolved.as_deref().unwrap_or(target);
            if !path.starts_with('/') {
                report.relative += 1;
                return caps[0].to_string();
            }

            report.rewritten += 1;
            format!("[{}]({}{})", label, self.base_url, path)
        });

        (output.into_owned(), report)
    }
}

fn is_term_reference(target: &str) -> bool {
    target.trim_start_matches('/').starts_with("t/")
}
