use anyhow::{Context, Result, bail};
use std::fs;
use termdocs::{Config, LinkRewriter, TermResolver, TermTable};

fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    config.validate().context("Invalid configuration")?;

    let table = TermTable::load(config.terms_path()).context("Failed to load terms")?;
    let resolver = TermResolver::new(&table).context("Failed to compile term patterns")?;
    log::info!(
        "Loaded {} terms ({} referenceable)",
        table.len(),
        resolver.term_count()
    );

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let rewriter = LinkRewriter::new(&resolver, &config.base_url);
    let summary = termdocs::build_templates(&config.content, &config.output, &rewriter)
        .context("Failed to build templates")?;

    for path in &summary.written {
        println!("Generated: {}", path.display());
    }

    println!(
        "Generated {} templates ({} links rewritten, {} external, {} relative)",
        summary.written.len(),
        summary.report.rewritten,
        summary.report.external,
        summary.report.relative
    );

    if !summary.report.unresolved.is_empty() {
        log::warn!(
            "{} term links did not resolve",
            summary.report.unresolved.len()
        );

        if config.strict {
            bail!(
                "Unresolved term links: {}",
                summary.report.unresolved.join(", ")
            );
        }
    }

    if config.no_generate {
        return Ok(());
    }

    termdocs::generator::run(&config.generator, ".").context("Documentation generation failed")?;

    Ok(())
}
