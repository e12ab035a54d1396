//! Raw records supplied by the data layer.
//!
//! Two sources describe a champion:
//! - **metadata** ([`ChampionMeta`]): spell ids in slot order, per-rank
//!   cooldown/cost/range, effect amounts and base stats
//! - **spell bundle** ([`SpellBundle`]): the exported game-data object that
//!   holds each spell's data values and calculation formulas
//!
//! Fields are lenient: missing or `null` lists read as empty so that partially
//! populated records still resolve whatever they can.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value as JsonValue};

use crate::formula::Calculation;

/// Deserializes `null` as `T::default()`.
pub(crate) fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Champion Metadata
// ============================================================================

/// Metadata for one champion.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChampionMeta {
    /// Champion id (`Ahri`, `MonkeyKing`).
    #[serde(default)]
    pub id: Option<String>,

    /// Spells in slot order (Q, W, E, R).
    #[serde(default, deserialize_with = "null_to_default")]
    pub spells: Vec<SpellMeta>,

    /// Passive script override; defaults to `<id>Passive`.
    #[serde(default)]
    pub passive: Option<PassiveMeta>,

    /// Base stats (`hp`, `armorperlevel`, ...). Non-numeric entries are ignored.
    #[serde(default, deserialize_with = "null_to_default")]
    pub stats: IndexMap<String, JsonValue>,
}

/// Per-spell metadata.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellMeta {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub cooldown: Vec<f64>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub cost: Vec<f64>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub range: Vec<f64>,

    /// Effect amounts indexed by effect number; index 0 is usually `null`.
    #[serde(default, deserialize_with = "null_to_default")]
    pub effect: Vec<Option<Vec<f64>>>,

    /// Effect amounts as `"10/20/30"` strings, parallel to `effect`.
    #[serde(default, deserialize_with = "null_to_default")]
    pub effect_burn: Vec<Option<String>>,
}

/// Passive metadata.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PassiveMeta {
    #[serde(default)]
    pub id: Option<String>,
}

// ============================================================================
// Spell Bundle
// ============================================================================

/// Data values and formulas of one spell.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SpellData {
    #[serde(
        rename = "DataValues",
        alias = "mDataValues",
        default,
        deserialize_with = "null_to_default"
    )]
    pub data_values: Vec<DataValue>,

    #[serde(
        rename = "mSpellCalculations",
        default,
        deserialize_with = "null_to_default"
    )]
    pub calculations: IndexMap<String, Calculation>,
}

/// Named per-rank values attached to a spell.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DataValue {
    #[serde(rename = "mName", default)]
    pub name: Option<String>,

    #[serde(rename = "mValues", default, deserialize_with = "null_to_default")]
    pub values: Vec<f64>,
}

/// Exported game-data object for one champion, keyed by object path.
///
/// Spell entries live under keys such as
/// `Characters/Ahri/Spells/AhriOrbOfDeceptionAbility/AhriOrbOfDeception`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct SpellBundle {
    entries: Map<String, JsonValue>,
}

impl SpellBundle {
    pub fn new(entries: Map<String, JsonValue>) -> Self {
        Self { entries }
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the bundle holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the spell whose entry key ends with `/<script_name>` (case-insensitive).
    ///
    /// The spell payload is the entry's `mSpell` object when present, else the
    /// entry itself. Entries that fail to deserialize are logged and skipped.
    pub fn find_spell(&self, script_name: &str) -> Option<SpellData> {
        if script_name.is_empty() {
            return None;
        }
        let suffix = format!("/{}", script_name.to_lowercase());

        let (key, entry) = self
            .entries
            .iter()
            .find(|(key, value)| value.is_object() && key.to_lowercase().ends_with(&suffix))?;

        let payload = entry
            .get("mSpell")
            .filter(|spell| spell.is_object())
            .unwrap_or(entry);

        match SpellData::deserialize(payload) {
            Ok(data) => Some(data),
            Err(error) => {
                tracing::warn!(script = script_name, key = %key, %error, "Malformed spell data");
                None
            }
        }
    }
}
