//! Markdown link rewriting for glossary term references.
//!
//! This module resolves term references (`t/alarm`, `/t/alarms/custom/...`)
//! against the term table and rewrites inline markdown links into absolute
//! documentation URLs.

mod links;
mod rewriter;

pub use links::TermResolver;
pub use rewriter::{LinkRewriter, RewriteReport};
