//! Resolver configuration loader.

use std::path::Path;

use tooltip_core::ResolverConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for resolver configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing ResolverConfig
    ///
    /// # Returns
    ///
    /// Returns a ResolverConfig; fields missing from the file take their defaults.
    pub fn load(path: &Path) -> LoadResult<ResolverConfig> {
        let content = read_file(path)?;
        let config: ResolverConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML {}: {}", path.display(), e))?;

        Ok(config)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<ResolverConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No resolver config, using defaults");
            return Ok(ResolverConfig::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigLoader::load_or_default(&dir.path().join("tooltip.toml")).unwrap();
        assert_eq!(config, ResolverConfig::default());
        assert!(ConfigLoader::load(&dir.path().join("tooltip.toml")).is_err());
    }

    #[test]
    fn parses_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tooltip.toml");
        std::fs::write(&path, "locales = [\"ru\"]\nbins_dir = \"bins\"\n").unwrap();

        let config = ConfigLoader::load_or_default(&path).unwrap();
        assert_eq!(config.locales, vec!["ru"]);
        assert_eq!(config.bins_dir, Path::new("bins"));
        assert_eq!(config.base_locale, "en");
    }

    #[test]
    fn invalid_toml_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tooltip.toml");
        std::fs::write(&path, "locales = 3").unwrap();

        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("tooltip.toml"));
    }
}
