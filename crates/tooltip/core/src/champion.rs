//! Champion-level resolution: ability aliases, base stats and locale walks.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::ability::{AbilityResolver, BaseStats};
use crate::locale::resource_name;
use crate::naming::{AliasStrategy, normalize_alias};
use crate::records::{ChampionMeta, SpellBundle};
use crate::report::ResolutionStats;
use crate::substitute::Substitution;

/// Alias keys of the first four spells, in slot order.
pub const SLOT_KEYS: [&str; 4] = ["q", "w", "e", "r"];

/// Alias key and ability name of the passive.
pub const PASSIVE_KEY: &str = "passive";

/// Record field holding per-spell text, in slot order.
const SPELLS_FIELD: &str = "spells";

/// Record field holding the passive's text.
const PASSIVE_FIELD: &str = "passive";

/// Resolves placeholders for one champion.
///
/// Owns every [`AbilityResolver`] of the champion. Several alias keys may point
/// at the same ability:
///
/// | key                    | example            |
/// |------------------------|--------------------|
/// | raw id, lower-cased    | `ahriorbofdeception` |
/// | normalized id          | `ahriorbofdeception` |
/// | slot letter            | `q`                |
/// | champion alias + slot  | `ahriq`            |
/// | passive                | `passive`, `ahripassive` |
#[derive(Clone, Debug)]
pub struct ChampionResolver {
    name: String,
    alias: String,
    partype: String,
    stats: BaseStats,
    spell_ids: Vec<String>,
    abilities: Vec<AbilityResolver>,
    aliases: HashMap<String, usize>,
}

impl ChampionResolver {
    /// Builds the resolver for one champion.
    ///
    /// # Arguments
    ///
    /// * `name` - Key of the champion in the metadata and text maps
    /// * `meta` - Champion metadata (spells in slot order, stats)
    /// * `bundle` - Exported game data holding spell values and formulas
    /// * `base_record` - Base-locale text record; only `partype` is read
    ///
    /// Spells whose data is missing from the bundle are omitted.
    pub fn new(name: &str, meta: &ChampionMeta, bundle: &SpellBundle, base_record: &JsonValue) -> Self {
        let id = meta.id.as_deref().unwrap_or(name);
        let alias = normalize_alias(id);
        let partype = base_record
            .get("partype")
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string();

        let mut resolver = Self {
            name: name.to_string(),
            alias,
            partype,
            stats: BaseStats::from_meta(&meta.stats),
            spell_ids: meta
                .spells
                .iter()
                .map(|spell| spell.id.clone().unwrap_or_default())
                .collect(),
            abilities: Vec::new(),
            aliases: HashMap::new(),
        };

        for (index, spell) in meta.spells.iter().enumerate() {
            let Some(spell_id) = spell.id.as_deref().filter(|id| !id.is_empty()) else {
                continue;
            };
            let Some(data) = bundle.find_spell(spell_id) else {
                tracing::debug!(champion = name, spell = spell_id, "Spell data not found, ability omitted");
                continue;
            };

            let mut keys = vec![spell_id.to_lowercase(), normalize_alias(spell_id)];
            if let Some(letter) = SLOT_KEYS.get(index) {
                keys.push(letter.to_string());
                keys.push(format!("{}{letter}", resolver.alias));
            }
            resolver.register(AbilityResolver::new(spell_id, Some(spell), data), keys);
        }

        let passive_script = meta
            .passive
            .as_ref()
            .and_then(|passive| passive.id.clone())
            .unwrap_or_else(|| format!("{id}Passive"));
        match bundle.find_spell(&passive_script) {
            Some(data) => {
                let keys = vec![PASSIVE_KEY.to_string(), normalize_alias(&passive_script)];
                resolver.register(AbilityResolver::new(PASSIVE_KEY, None, data), keys);
            }
            None => {
                tracing::debug!(champion = name, script = %passive_script, "Passive data not found");
            }
        }

        resolver
    }

    fn register(&mut self, ability: AbilityResolver, keys: Vec<String>) {
        let index = self.abilities.len();
        self.abilities.push(ability);
        for key in keys {
            self.aliases.insert(key, index);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized champion alias (`MonkeyKing` → `monkeyking`).
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    pub fn abilities(&self) -> &[AbilityResolver] {
        &self.abilities
    }

    /// Looks up an ability by exact alias key.
    pub fn ability(&self, key: &str) -> Option<&AbilityResolver> {
        self.aliases.get(key).map(|&index| &self.abilities[index])
    }

    /// Ability of the spell at `index` in metadata order.
    ///
    /// Tries the spell id (lower-cased, then normalized), then the slot letter.
    pub fn ability_for_slot(&self, index: usize) -> Option<&AbilityResolver> {
        let by_id = self.spell_ids.get(index).and_then(|spell_id| {
            self.ability(&spell_id.to_lowercase())
                .or_else(|| self.ability(&normalize_alias(spell_id)))
        });
        by_id.or_else(|| SLOT_KEYS.get(index).and_then(|letter| self.ability(letter)))
    }

    /// Resolves a free-form ability reference (`q`, `AhriQ`, `Ahri_Orb`).
    pub fn find_ability(&self, reference: &str) -> Option<&AbilityResolver> {
        AliasStrategy::SPELL_REFERENCE
            .iter()
            .find_map(|strategy| self.ability(&strategy.apply(reference)))
    }

    /// Resource name in `locale`: translation, English label, or raw `partype`.
    pub fn ability_resource(&self, locale: &str) -> String {
        resource_name(locale, &self.partype)
    }

    /// Resolves every placeholder in one locale's text record, in place.
    ///
    /// - `spells[i]` resolves against [`Self::ability_for_slot`]`(i)`
    /// - `passive` resolves against the passive ability
    /// - every other field resolves without an ability
    ///
    /// A `spells` field that is not an array, and `passive` when the champion
    /// has no passive data, are left untouched and not counted.
    pub fn resolve_locale(&self, locale: &str, record: &mut JsonValue, stats: &mut ResolutionStats) {
        let Some(fields) = record.as_object_mut() else {
            return;
        };

        for (field, value) in fields.iter_mut() {
            match (field.as_str(), value) {
                (SPELLS_FIELD, JsonValue::Array(spells)) => {
                    for (index, spell) in spells.iter_mut().enumerate() {
                        Substitution::new(self, self.ability_for_slot(index), locale)
                            .apply(spell, stats);
                    }
                }
                (SPELLS_FIELD, _) => {}
                (PASSIVE_FIELD, value) => {
                    if let Some(passive) = self.ability(PASSIVE_KEY) {
                        Substitution::new(self, Some(passive), locale).apply(value, stats);
                    }
                }
                (_, value) => {
                    Substitution::new(self, None, locale).apply(value, stats);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn meta() -> ChampionMeta {
        serde_json::from_value(json!({
            "id": "MonkeyKing",
            "spells": [
                { "id": "MonkeyKingDoubleAttack", "cooldown": [9, 8, 7] },
                { "id": "MonkeyKingDecoy", "cooldown": [22] },
                { "id": "MonkeyKingNimbus" },
                { "id": "MonkeyKingSpinToWin" }
            ],
            "stats": { "hp": 610 }
        }))
        .unwrap()
    }

    fn bundle() -> SpellBundle {
        serde_json::from_value(json!({
            "Characters/MonkeyKing/Spells/MonkeyKingDoubleAttackAbility/MonkeyKingDoubleAttack": {
                "mSpell": { "DataValues": [{ "mName": "BonusDamage", "mValues": [20, 45, 70] }] }
            },
            "Characters/MonkeyKing/Spells/MonkeyKingDecoyAbility/MonkeyKingDecoy": {
                "mSpell": { "DataValues": [] }
            },
            "Characters/MonkeyKing/Spells/MonkeyKingSpinToWinAbility/MonkeyKingSpinToWin": {
                "mSpell": {}
            },
            "Characters/MonkeyKing/Spells/MonkeyKingPassiveAbility/MonkeyKingPassive": {
                "mSpell": { "DataValues": [{ "mName": "Armor", "mValues": [5] }] }
            }
        }))
        .unwrap()
    }

    fn champion() -> ChampionResolver {
        ChampionResolver::new("Wukong", &meta(), &bundle(), &json!({ "partype": "Mana" }))
    }

    #[test]
    fn registers_aliases_per_ability() {
        let champion = champion();
        assert_eq!(champion.alias(), "monkeyking");
        assert_eq!(champion.abilities().len(), 4);

        for key in ["q", "monkeykingq", "monkeykingdoubleattack"] {
            assert_eq!(champion.ability(key).unwrap().name(), "MonkeyKingDoubleAttack", "{key}");
        }
        assert_eq!(champion.ability("r").unwrap().name(), "MonkeyKingSpinToWin");
        assert_eq!(champion.ability("passive").unwrap().name(), "passive");
        assert_eq!(champion.ability("monkeykingpassive").unwrap().name(), "passive");
    }

    #[test]
    fn spells_without_data_are_omitted() {
        let champion = champion();
        assert!(champion.ability("e").is_none());
        assert!(champion.ability_for_slot(2).is_none());
        assert!(champion.ability_for_slot(7).is_none());
    }

    #[test]
    fn slot_lookup_prefers_spell_id() {
        let champion = champion();
        assert_eq!(champion.ability_for_slot(1).unwrap().name(), "MonkeyKingDecoy");
        assert_eq!(champion.ability_for_slot(3).unwrap().name(), "MonkeyKingSpinToWin");
    }

    #[test]
    fn references_try_each_alias_strategy() {
        let champion = champion();
        assert_eq!(champion.find_ability("Q").unwrap().name(), "MonkeyKingDoubleAttack");
        assert_eq!(champion.find_ability("MonkeyKing_W").unwrap().name(), "MonkeyKingDecoy");
        assert!(champion.find_ability("x").is_none());
    }

    #[test]
    fn stats_are_camel_cased() {
        assert_eq!(champion().stats().get("Hp"), Some(610.0));
    }

    #[test]
    fn resource_name_per_locale() {
        let champion = champion();
        assert_eq!(champion.ability_resource("en"), "Mana");
        assert_eq!(champion.ability_resource("ru"), "Мана");

        let no_record = ChampionResolver::new("Wukong", &meta(), &bundle(), &json!(null));
        assert_eq!(no_record.ability_resource("ru"), "");
    }

    #[test]
    fn passive_script_override() {
        let mut meta = meta();
        meta.passive = Some(crate::records::PassiveMeta {
            id: Some("MonkeyKingDecoy".into()),
        });
        let champion = ChampionResolver::new("Wukong", &meta, &bundle(), &json!({}));
        assert!(champion.ability("monkeykingdecoy").is_some());
        assert_eq!(champion.ability("passive").unwrap().name(), "passive");
    }
}
