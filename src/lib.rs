//! Glossary term link rewriting for documentation templates.

mod config;
pub mod generator;
mod markdown;
mod path;
mod templates;
mod terms;

pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_TERMS_FILE};
pub use markdown::{LinkRewriter, RewriteReport, TermResolver};
pub use path::{TEMPLATE_EXTENSION, template_path};
pub use templates::{BuildSummary, build_templates, find_documents, write_template};
pub use terms::{Term, TermTable};
