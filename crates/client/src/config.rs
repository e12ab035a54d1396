//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration of one resolver run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `champion_meta.json`, text maps and bundles.
    pub data_dir: PathBuf,
    /// Directory for the log file; `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
    /// Where to write the JSON diagnostics report.
    pub report_path: Option<PathBuf>,
    /// Resolve and report without writing text maps.
    pub dry_run: bool,
    /// Overrides `ResolverConfig::locales` when set.
    pub locales: Option<Vec<String>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_dir: None,
            report_path: None,
            dry_run: false,
            locales: None,
        }
    }
}

impl ClientConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TOOLTIP_DATA_DIR` - Data directory (default: `.`)
    /// - `TOOLTIP_LOG_DIR` - Log file directory (default: none)
    /// - `TOOLTIP_LOG_TO_FILE` - Log to the platform cache directory when no
    ///   `TOOLTIP_LOG_DIR` is given (default: false)
    /// - `TOOLTIP_REPORT` - Path of the JSON diagnostics report (default: none)
    /// - `TOOLTIP_DRY_RUN` - Skip writing text maps (default: false)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = var("TOOLTIP_DATA_DIR").filter(|dir| !dir.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        config.log_dir = var("TOOLTIP_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        if config.log_dir.is_none() && read_flag(&var, "TOOLTIP_LOG_TO_FILE") {
            config.log_dir = Some(crate::logging::default_log_dir());
        }

        config.report_path = var("TOOLTIP_REPORT")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        config.dry_run = read_flag(&var, "TOOLTIP_DRY_RUN");

        config
    }
}

/// Reads a boolean variable; setting it without a value (or to `1`) means true.
fn read_flag(var: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    match read_env::<bool>(var, key) {
        Some(enable) => enable,
        None => var(key).is_some_and(|value| value.is_empty() || value == "1"),
    }
}

fn read_env<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    var(key)?.parse().ok()
}
