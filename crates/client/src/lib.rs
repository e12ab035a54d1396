//! Command-line driver for the tooltip resolver.
//!
//! # Pipeline
//!
//! ```text
//! ContentFactory (data_dir, tooltip.toml)
//!   ├─→ champion_meta.json ──┐
//!   ├─→ champion_text_<base>.json ──→ ChampionCatalog (one resolver per champion)
//!   └─→ <bins_dir>/<alias>.bin.json ┘
//!
//! load every champion_text_<locale>.json
//!   ──→ resolve each in place
//!   ──→ write each to output_dir or the same file
//! ```
//!
//! Counts and diagnostics of every locale are merged into one
//! [`ResolutionStats`], optionally written as a JSON report.

pub mod config;
pub mod logging;

pub use config::ClientConfig;

use std::path::Path;

use anyhow::{Context, Result};
use tooltip_content::{ChampionCatalog, ContentFactory};
use tooltip_core::ResolutionStats;

/// Runs one resolution pass over `config.data_dir`.
///
/// Individual placeholder failures never fail the run; only unreadable inputs
/// or unwritable outputs do. All locale text maps are read before any is
/// written, so a missing input leaves every file as it was.
pub fn run(config: &ClientConfig) -> Result<ResolutionStats> {
    let mut factory = ContentFactory::open(&config.data_dir)?;
    if let Some(locales) = &config.locales {
        let resolver_config = factory.config().clone().with_locales(locales.clone());
        factory = factory.with_config(resolver_config);
    }
    let resolver_config = factory.config().clone();

    tracing::info!(
        data_dir = %config.data_dir.display(),
        locales = ?resolver_config.locales,
        dry_run = config.dry_run,
        "Resolving tooltip placeholders"
    );

    let meta = factory.load_meta()?;
    let base_text = factory
        .load_text(&resolver_config.base_locale)
        .with_context(|| format!("Failed to load base locale '{}'", resolver_config.base_locale))?;

    let catalog = ChampionCatalog::build(&factory, &meta, &base_text);
    tracing::info!(
        champions = catalog.len(),
        skipped = meta.len().saturating_sub(catalog.len()),
        "Champion resolvers built"
    );

    // Every text map is loaded before anything is written
    let mut texts = Vec::with_capacity(resolver_config.locales.len());
    for locale in &resolver_config.locales {
        let text = if *locale == resolver_config.base_locale {
            base_text.clone()
        } else {
            factory.load_text(locale)?
        };
        texts.push((locale.as_str(), text));
    }

    let mut total = ResolutionStats::new();
    for (locale, text) in &mut texts {
        let mut stats = ResolutionStats::new();
        catalog.resolve_text(locale, text, &mut stats);
        tracing::info!(
            locale = %locale,
            replaced = stats.replaced,
            skipped = stats.skipped,
            unresolved = stats.errors.len(),
            "Locale resolved"
        );
        total.merge(stats);
    }

    if config.dry_run {
        tracing::info!("Dry run, text not written");
    } else {
        for (locale, text) in &texts {
            let path = factory.save_text(locale, text)?;
            tracing::info!(path = %path.display(), "Wrote resolved text");
        }
    }

    if let Some(path) = &config.report_path {
        write_report(path, &total)?;
        tracing::info!(path = %path.display(), "Wrote diagnostics report");
    }

    tracing::info!(
        replaced = total.replaced,
        skipped = total.skipped,
        unresolved = total.errors.len(),
        "Placeholders resolved"
    );

    Ok(total)
}

/// Writes `stats` as pretty-printed JSON.
pub fn write_report(path: &Path, stats: &ResolutionStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats).context("Failed to serialize report")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write report {}", path.display()))
}
