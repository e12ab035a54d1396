//! Resolvers for every champion of a data directory.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use tooltip_core::{ChampionResolver, ResolutionStats, normalize_alias};

use crate::loaders::{ContentFactory, MetaMap, TextMap};

/// Champion name → resolver, in metadata order.
#[derive(Debug, Default)]
pub struct ChampionCatalog {
    champions: IndexMap<String, ChampionResolver>,
}

impl ChampionCatalog {
    /// Builds a resolver for every champion whose spell bundle loads.
    ///
    /// Champions without a readable bundle are logged and skipped.
    ///
    /// # Arguments
    ///
    /// * `factory` - Source of spell bundles
    /// * `meta` - Champion metadata
    /// * `base_text` - Base-locale text map (supplies `partype`)
    pub fn build(factory: &ContentFactory, meta: &MetaMap, base_text: &TextMap) -> Self {
        let missing = JsonValue::Null;
        let mut champions = IndexMap::with_capacity(meta.len());

        for (name, champion_meta) in meta {
            let alias = normalize_alias(champion_meta.id.as_deref().unwrap_or(name));
            let bundle = match factory.load_bundle(&alias) {
                Ok(bundle) => bundle,
                Err(error) => {
                    tracing::warn!(champion = %name, %alias, error = %error, "Spell bundle unavailable, champion skipped");
                    continue;
                }
            };

            let base_record = base_text.get(name).unwrap_or(&missing);
            let resolver = ChampionResolver::new(name, champion_meta, &bundle, base_record);
            tracing::debug!(
                champion = %name,
                abilities = resolver.abilities().len(),
                "Champion resolver ready"
            );
            champions.insert(name.clone(), resolver);
        }

        Self { champions }
    }

    pub fn get(&self, name: &str) -> Option<&ChampionResolver> {
        self.champions.get(name)
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    /// Resolves every record of a locale text map in place.
    ///
    /// Records of champions missing from the catalog are left untouched.
    pub fn resolve_text(&self, locale: &str, text: &mut TextMap, stats: &mut ResolutionStats) {
        for (name, record) in text.iter_mut() {
            match self.champions.get(name) {
                Some(champion) => champion.resolve_locale(locale, record, stats),
                None => tracing::debug!(champion = %name, locale, "No resolver, record left as is"),
            }
        }
    }
}
