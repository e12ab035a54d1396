//! Localized text map loader and writer.

use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use crate::loaders::{LoadResult, read_file, write_file};

/// Champion name → localized text record, in file order.
pub type TextMap = Map<String, JsonValue>;

/// Loader for `champion_text_<locale>.json`.
pub struct TextLoader;

impl TextLoader {
    /// File name of the text map for `locale`.
    pub fn file_name(locale: &str) -> String {
        format!("champion_text_{locale}.json")
    }

    /// Load a text map from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a JSON object mapping champion name to text record
    pub fn load(path: &Path) -> LoadResult<TextMap> {
        let content = read_file(path)?;
        let text: TextMap = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse text JSON {}: {}", path.display(), e))?;

        Ok(text)
    }

    /// Write a text map as compact JSON, keeping key order.
    pub fn save(path: &Path, text: &TextMap) -> LoadResult<()> {
        let content = serde_json::to_string(text)
            .map_err(|e| anyhow::anyhow!("Failed to serialize text for {}: {}", path.display(), e))?;
        write_file(path, &content)
    }
}
