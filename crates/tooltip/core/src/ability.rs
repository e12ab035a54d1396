//! Per-ability name resolution.
//!
//! An [`AbilityResolver`] owns everything one spell knows about its numbers:
//! rank sequences from metadata, effect amounts, data values and calculation
//! formulas. Names are resolved through an [`AbilityScope`], which pairs the
//! ability with its champion's base stats and tracks formula nesting.
//!
//! ## Resolution Order
//! 1. Names that always render as zero (`spellmodifierdescriptionappend`, ...)
//! 2. Effect amounts: `e<n>`, `effect<n>`, `effect<n>amount`, optional `nl`
//! 3. `cooldown`, `cost`, `range` and their `nl` variants
//! 4. Data values (exact, then camel-cased)
//! 5. Calculations (exact, then camel-cased)
//! 6. Champion base stats (camel-cased)

use std::collections::HashMap;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value as JsonValue;

use crate::error::ResolveError;
use crate::formula::{self, Calculation, MAX_FORMULA_DEPTH};
use crate::naming::to_camel_case;
use crate::records::{SpellData, SpellMeta};
use crate::traits::ValueLookup;
use crate::value::Value;

/// Placeholder names that render as zero.
const SPECIAL_EMPTY: [&str; 3] = [
    "spellmodifierdescriptionappend",
    "spellmancost",
    "spelleffectfootnote",
];

static EFFECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:e|effect)(\d+)(?:amount)?(nl)?$").expect("valid regex")
});

// ============================================================================
// Base Stats
// ============================================================================

/// Champion base stats keyed by camel-cased name (`hp` → `Hp`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseStats {
    values: HashMap<String, f64>,
}

impl BaseStats {
    /// Builds the table from raw metadata stats, keeping numeric entries only.
    pub fn from_meta(stats: &IndexMap<String, JsonValue>) -> Self {
        let values = stats
            .iter()
            .filter_map(|(name, value)| Some((to_camel_case(name), value.as_f64()?)))
            .collect();
        Self { values }
    }

    /// Looks up a stat by its camel-cased name.
    pub fn get(&self, camel_name: &str) -> Option<f64> {
        self.values.get(camel_name).copied()
    }
}

// ============================================================================
// Ability Resolver
// ============================================================================

/// Resolvable numbers of one ability.
#[derive(Clone, Debug, Default)]
pub struct AbilityResolver {
    name: String,
    cooldown: Vec<f64>,
    cost: Vec<f64>,
    range: Vec<f64>,
    effect: Vec<Option<Vec<f64>>>,
    effect_burn: Vec<Option<String>>,
    /// Lower-cased data value name → per-rank values.
    data_values: HashMap<String, Vec<f64>>,
    /// Lower-cased calculation name → formula.
    calculations: HashMap<String, Calculation>,
}

impl AbilityResolver {
    /// Creates a resolver from optional spell metadata and bundle data.
    ///
    /// # Arguments
    ///
    /// * `name` - Identity used in diagnostics (spell id, or `passive`)
    /// * `meta` - Rank sequences and effect amounts; the passive has none
    /// * `data` - Data values and calculations from the spell bundle
    pub fn new(name: impl Into<String>, meta: Option<&SpellMeta>, data: SpellData) -> Self {
        let meta = meta.cloned().unwrap_or_default();

        let data_values = data
            .data_values
            .into_iter()
            .filter_map(|entry| {
                let name = entry.name.filter(|name| !name.is_empty())?;
                Some((name.to_lowercase(), entry.values))
            })
            .collect();

        let calculations = data
            .calculations
            .into_iter()
            .map(|(name, calculation)| (name.to_lowercase(), calculation))
            .collect();

        Self {
            name: name.into(),
            cooldown: meta.cooldown,
            cost: meta.cost,
            range: meta.range,
            effect: meta.effect,
            effect_burn: meta.effect_burn,
            data_values,
            calculations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a lookup scope that falls back to `stats` for unknown names.
    pub fn scope<'a>(&'a self, stats: &'a BaseStats) -> AbilityScope<'a> {
        AbilityScope {
            ability: self,
            stats,
            depth: 0,
        }
    }

    /// Effect amounts for effect number `index`.
    ///
    /// Prefers the structured list; falls back to the `/`-delimited burn
    /// string; otherwise empty.
    fn effect_values(&self, index: usize) -> Result<Vec<f64>, ResolveError> {
        if let Some(Some(values)) = self.effect.get(index) {
            return Ok(values.clone());
        }

        let Some(Some(burn)) = self.effect_burn.get(index) else {
            return Ok(Vec::new());
        };

        burn.split('/')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                piece
                    .parse::<f64>()
                    .map_err(|_| ResolveError::InvalidEffectBurn(burn.clone()))
            })
            .collect()
    }

    fn rank_values(&self, name: &str) -> Option<Vec<f64>> {
        let (base, next_level) = match name.strip_suffix("nl") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let values = match base {
            "cooldown" => &self.cooldown,
            "cost" => &self.cost,
            "range" => &self.range,
            _ => return None,
        };
        Some(if next_level {
            shift_next(values)
        } else {
            values.clone()
        })
    }
}

// ============================================================================
// Ability Scope
// ============================================================================

/// An ability paired with its champion's base stats.
///
/// Each formula evaluation runs in a child scope one level deeper; past
/// [`MAX_FORMULA_DEPTH`] the lookup fails instead of recursing.
#[derive(Clone, Copy, Debug)]
pub struct AbilityScope<'a> {
    ability: &'a AbilityResolver,
    stats: &'a BaseStats,
    depth: usize,
}

impl AbilityScope<'_> {
    pub fn ability(&self) -> &AbilityResolver {
        self.ability
    }

    fn evaluate_calculation(
        &self,
        name: &str,
        calculation: &Calculation,
    ) -> Result<Value, ResolveError> {
        if self.depth >= MAX_FORMULA_DEPTH {
            return Err(ResolveError::FormulaDepthExceeded {
                name: name.to_string(),
                limit: MAX_FORMULA_DEPTH,
            });
        }
        let nested = AbilityScope {
            depth: self.depth + 1,
            ..*self
        };
        formula::evaluate(calculation, &nested)
    }
}

impl ValueLookup for AbilityScope<'_> {
    fn get_value(&self, name: &str) -> Result<Value, ResolveError> {
        let name = name.trim();
        let lower = name.to_lowercase();
        let ability = self.ability;

        if SPECIAL_EMPTY.contains(&lower.as_str()) {
            return Ok(Value::zero());
        }

        if let Some(caps) = EFFECT_RE.captures(&lower) {
            // An index too large for usize cannot exist in the effect tables
            let values = match caps[1].parse::<usize>() {
                Ok(index) => ability.effect_values(index)?,
                Err(_) => Vec::new(),
            };
            let values = if caps.get(2).is_some() {
                shift_next(&values)
            } else {
                values
            };
            return Ok(Value::from_numbers(values));
        }

        if let Some(values) = ability.rank_values(&lower) {
            return Ok(Value::from_numbers(values));
        }

        let camel = to_camel_case(&lower);
        let camel_lower = camel.to_lowercase();

        if let Some(values) = ability
            .data_values
            .get(&lower)
            .or_else(|| ability.data_values.get(&camel_lower))
        {
            return Ok(Value::from_numbers(values.iter().copied()));
        }

        if let Some(calculation) = ability
            .calculations
            .get(&lower)
            .or_else(|| ability.calculations.get(&camel_lower))
        {
            return self.evaluate_calculation(name, calculation);
        }

        if let Some(stat) = self.stats.get(&camel) {
            return Ok(Value::from_scalar(stat));
        }

        Err(ResolveError::UnknownPlaceholder {
            name: name.to_string(),
            ability: ability.name.clone(),
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Shifts rank values one step forward; the last rank repeats.
///
/// `[1, 2, 3]` becomes `[2, 3, 3]`.
pub fn shift_next(values: &[f64]) -> Vec<f64> {
    match values {
        [] => Vec::new(),
        [.., last] => values[1..].iter().copied().chain([*last]).collect(),
    }
}
