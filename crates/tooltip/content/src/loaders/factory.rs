//! Content factory for loading resolver inputs from a data directory.

use std::path::{Path, PathBuf};

use tooltip_core::{ResolverConfig, SpellBundle};

use crate::loaders::{
    BinLoader, ConfigLoader, LoadResult, MetaLoader, MetaMap, TextLoader, TextMap,
};

/// Config file name inside the data directory.
pub const CONFIG_FILE: &str = "tooltip.toml";

/// Metadata file name inside the data directory.
pub const META_FILE: &str = "champion_meta.json";

/// Content factory that loads all resolver inputs from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── tooltip.toml               (optional)
/// ├── champion_meta.json
/// ├── champion_text_en.json
/// ├── champion_text_ru.json
/// └── cdragon_cache/             (ResolverConfig::bins_dir)
///     ├── ahri.bin.json
///     └── zed.bin.json
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
    config: ResolverConfig,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory, with the
    /// default configuration.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            config: ResolverConfig::default(),
        }
    }

    /// Creates a content factory configured from `tooltip.toml` in `data_dir`.
    ///
    /// A missing config file yields the defaults.
    pub fn open(data_dir: impl Into<PathBuf>) -> LoadResult<Self> {
        let factory = Self::new(data_dir);
        let config = factory.load_config()?;
        Ok(factory.with_config(config))
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Load resolver configuration from `tooltip.toml`.
    pub fn load_config(&self) -> LoadResult<ResolverConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join(CONFIG_FILE))
    }

    /// Load champion metadata from `champion_meta.json`.
    pub fn load_meta(&self) -> LoadResult<MetaMap> {
        MetaLoader::load(&self.data_dir.join(META_FILE))
    }

    /// Load the spell bundle of champion `alias` from the bins directory.
    pub fn load_bundle(&self, alias: &str) -> LoadResult<SpellBundle> {
        BinLoader::load(&BinLoader::path(&self.bins_dir(), alias))
    }

    /// Load the text map of `locale` from `champion_text_<locale>.json`.
    pub fn load_text(&self, locale: &str) -> LoadResult<TextMap> {
        TextLoader::load(&self.text_path(locale))
    }

    /// Write the text map of `locale` to the output location.
    ///
    /// Writes to `output_dir` when configured, otherwise overwrites the input file.
    pub fn save_text(&self, locale: &str, text: &TextMap) -> LoadResult<PathBuf> {
        let path = self.output_path(locale);
        TextLoader::save(&path, text)?;
        Ok(path)
    }

    /// Input path of the text map for `locale`.
    pub fn text_path(&self, locale: &str) -> PathBuf {
        self.data_dir.join(TextLoader::file_name(locale))
    }

    /// Output path of the text map for `locale`.
    pub fn output_path(&self, locale: &str) -> PathBuf {
        match &self.config.output_dir {
            Some(dir) => self.data_dir.join(dir).join(TextLoader::file_name(locale)),
            None => self.text_path(locale),
        }
    }

    /// Directory holding spell bundles.
    pub fn bins_dir(&self) -> PathBuf {
        self.data_dir.join(&self.config.bins_dir)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(factory.bins_dir(), Path::new("/tmp/data/cdragon_cache"));
        assert_eq!(
            factory.text_path("ru"),
            Path::new("/tmp/data/champion_text_ru.json")
        );
        assert_eq!(factory.output_path("ru"), factory.text_path("ru"));
    }

    #[test]
    fn output_dir_redirects_writes() {
        let factory = ContentFactory::new("/tmp/data")
            .with_config(ResolverConfig::default().with_output_dir("resolved"));
        assert_eq!(
            factory.output_path("en"),
            Path::new("/tmp/data/resolved/champion_text_en.json")
        );

        let absolute = ContentFactory::new("/tmp/data")
            .with_config(ResolverConfig::default().with_output_dir("/srv/out"));
        assert_eq!(
            absolute.output_path("en"),
            Path::new("/srv/out/champion_text_en.json")
        );
    }

    #[test]
    fn open_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "bins_dir = \"bins\"").unwrap();

        let factory = ContentFactory::open(dir.path()).unwrap();
        assert_eq!(factory.bins_dir(), dir.path().join("bins"));
        assert_eq!(factory.config().locales, vec!["en", "ru"]);
    }
}
