use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Resolver configuration, usually read from `tooltip.toml` in the data directory.
///
/// Every field is optional in the file; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Locales whose text maps are resolved, in order.
    pub locales: Vec<String>,

    /// Locale whose records supply `partype` for resource names.
    pub base_locale: String,

    /// Directory (relative to the data directory) holding `<alias>.bin.json` bundles.
    pub bins_dir: PathBuf,

    /// Where resolved text maps are written. `None` rewrites them in place.
    pub output_dir: Option<PathBuf>,
}

impl ResolverConfig {
    // ===== defaults =====
    pub const DEFAULT_LOCALES: [&'static str; 2] = ["en", "ru"];
    pub const DEFAULT_BASE_LOCALE: &'static str = "en";
    pub const DEFAULT_BINS_DIR: &'static str = "cdragon_cache";

    pub fn new() -> Self {
        Self {
            locales: Self::DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect(),
            base_locale: Self::DEFAULT_BASE_LOCALE.to_string(),
            bins_dir: PathBuf::from(Self::DEFAULT_BINS_DIR),
            output_dir: None,
        }
    }

    pub fn with_locales(mut self, locales: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(output_dir.into());
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_is_empty() {
        let config: ResolverConfig = toml::from_str("").unwrap();
        assert_eq!(config, ResolverConfig::default());
        assert_eq!(config.locales, vec!["en", "ru"]);
        assert_eq!(config.base_locale, "en");
        assert_eq!(config.bins_dir, PathBuf::from("cdragon_cache"));
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn partial_overrides() {
        let config: ResolverConfig = toml::from_str(
            r#"
            locales = ["en"]
            output_dir = "out"
            "#,
        )
        .unwrap();
        assert_eq!(config.locales, vec!["en"]);
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.bins_dir, PathBuf::from("cdragon_cache"));
    }

    #[test]
    fn builders() {
        let config = ResolverConfig::new().with_locales(["ru"]).with_output_dir("dist");
        assert_eq!(config.locales, vec!["ru"]);
        assert_eq!(config.output_dir, Some(PathBuf::from("dist")));
    }
}
