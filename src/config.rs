//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Default documentation host links are rewritten against.
pub const DEFAULT_BASE_URL: &str = "https://docs.example.com";

/// Term table file name looked up inside the content directory.
pub const DEFAULT_TERMS_FILE: &str = "terms.json";

/// Command line configuration for termdocs.
#[derive(Debug, Clone, Parser)]
#[command(name = "termdocs", version, about, long_about = None)]
pub struct Config {
    /// Markdown content directory
    #[arg(long, default_value = "content")]
    pub content: PathBuf,

    /// Term table JSON (defaults to <content>/terms.json)
    #[arg(long)]
    pub terms: Option<PathBuf>,

    /// Template output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Documentation host prepended to rewritten links
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Generator command run after templates are written
    #[arg(long, default_value = "go generate")]
    pub generator: String,

    /// Skip running the generator
    #[arg(long)]
    pub no_generate: bool,

    /// Fail when a term link does not resolve
    #[arg(long)]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns term table path from configuration or content directory.
    pub fn terms_path(&self) -> PathBuf {
        self.terms
            .clone()
            .unwrap_or_else(|| self.content.join(DEFAULT_TERMS_FILE))
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content directory or term table does not exist,
    /// or the base URL is empty.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_dir() {
            bail!("Content directory does not exist: {}", self.content.display());
        }

        let terms = self.terms_path();
        if !terms.is_file() {
            bail!("Term table does not exist: {}", terms.display());
        }

        if self.base_url.trim().is_empty() {
            bail!("Base URL must not be empty");
        }

        Ok(())
    }

    /// Log level implied by the verbosity flag.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}
