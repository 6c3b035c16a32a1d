//! Catalog check binary - validates the compiled translation tables.
//!
//! Usage:
//!   cargo run --bin catalog-check          # Human-readable summary
//!   cargo run --bin catalog-check -- --json  # Full report as JSON
//!
//! Exits with an error when any table has a validation error. Warnings are
//! printed but do not fail the check.

use anyhow::{bail, Context, Result};
use farmnex_lingua::config::Config;
use farmnex_lingua::i18n::{Catalog, CatalogValidator, Language};
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_directive.parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let as_json = args.iter().any(|arg| arg == "--json");

    let catalog = Catalog::global();
    info!(
        "Checking {} translations, {} crops, {} animals, {} templates across {} languages",
        catalog.translations.len(),
        catalog.crops.len(),
        catalog.animals.len(),
        catalog.templates.len(),
        Language::all().len()
    );

    let report = CatalogValidator::validate_all();

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        );
    } else {
        for warning in &report.warnings {
            warn!("{}", warning);
        }
        for error in &report.errors {
            println!("error: {}", error);
        }
        println!(
            "{} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
    }

    if report.has_errors() {
        bail!("Catalog validation failed with {} error(s)", report.errors.len());
    }

    info!("✓ Catalog is consistent");
    Ok(())
}
