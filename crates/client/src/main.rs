//! Tooltip resolver binary.
//!
//! Loads configuration from `.env` and `TOOLTIP_*` variables, applies
//! command-line overrides, then runs one resolution pass.
//!
//! # Examples
//!
//! ```bash
//! # Resolve every configured locale in ./data, in place
//! resolve-tooltips --data-dir data
//!
//! # Check Russian text only, keep a diagnostics report, write nothing
//! resolve-tooltips --data-dir data --locale ru --dry-run --report unresolved.json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tooltip_client::{ClientConfig, logging};

/// Resolve `{{ placeholder }}` markers in champion tooltip text
#[derive(Parser)]
#[command(name = "resolve-tooltips")]
#[command(about = "Resolve tooltip placeholders in champion text maps", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory (overrides TOOLTIP_DATA_DIR)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Locale to resolve; repeat for several (overrides tooltip.toml)
    #[arg(short, long = "locale")]
    locales: Vec<String>,

    /// Write the diagnostics report to this file (overrides TOOLTIP_REPORT)
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Also log to a file in this directory (overrides TOOLTIP_LOG_DIR)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Resolve and report without writing text maps
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn apply(self, mut config: ClientConfig) -> ClientConfig {
        if let Some(data_dir) = self.data_dir {
            config.data_dir = data_dir;
        }
        if !self.locales.is_empty() {
            config.locales = Some(self.locales);
        }
        if let Some(report) = self.report {
            config.report_path = Some(report);
        }
        if let Some(log_dir) = self.log_dir {
            config.log_dir = Some(log_dir);
        }
        config.dry_run |= self.dry_run;
        config
    }
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Cli::parse().apply(ClientConfig::from_env());

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;

    tooltip_client::run(&config)?;
    Ok(())
}
