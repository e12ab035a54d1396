//! Spell bundle loader.

use std::path::{Path, PathBuf};

use tooltip_core::SpellBundle;

use crate::loaders::{LoadResult, read_file};

/// Loader for exported per-champion game data (`<alias>.bin.json`).
pub struct BinLoader;

impl BinLoader {
    /// Path of the bundle for champion `alias` inside `bins_dir`.
    pub fn path(bins_dir: &Path, alias: &str) -> PathBuf {
        bins_dir.join(format!("{alias}.bin.json"))
    }

    /// Load a spell bundle from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the exported bin JSON object
    ///
    /// # Returns
    ///
    /// Returns the bundle. Individual spells are only decoded on lookup.
    pub fn load(path: &Path) -> LoadResult<SpellBundle> {
        let content = read_file(path)?;
        let bundle: SpellBundle = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell bundle {}: {}", path.display(), e))?;

        Ok(bundle)
    }
}
