//! Champion metadata loader.

use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};
use tooltip_core::ChampionMeta;

use crate::loaders::{LoadResult, read_file};

/// Champion name → metadata, in file order.
pub type MetaMap = IndexMap<String, ChampionMeta>;

/// Loader for `champion_meta.json`.
pub struct MetaLoader;

impl MetaLoader {
    /// Load champion metadata from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON object mapping champion name to metadata
    ///
    /// # Returns
    ///
    /// Returns the metadata map. Entries that do not match the metadata
    /// shape are logged and left out; only an unreadable file or a non-object
    /// document is an error.
    pub fn load(path: &Path) -> LoadResult<MetaMap> {
        let content = read_file(path)?;
        let raw: Map<String, JsonValue> = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse metadata JSON {}: {}", path.display(), e))?;

        let mut champions = MetaMap::with_capacity(raw.len());
        for (name, entry) in raw {
            match serde_json::from_value::<ChampionMeta>(entry) {
                Ok(meta) => {
                    champions.insert(name, meta);
                }
                Err(error) => {
                    tracing::warn!(champion = %name, %error, "Skipping malformed champion metadata");
                }
            }
        }

        Ok(champions)
    }
}
