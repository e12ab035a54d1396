//! Placeholder resolution for champion ability tooltips.
//!
//! `tooltip-core` turns `{{ placeholder }}` markers in localized ability text
//! into concrete numbers computed from champion metadata and exported spell
//! data. It is pure: inputs arrive as deserialized records and text trees are
//! rewritten in memory. Reading and writing files is left to `tooltip-content`.
//!
//! The entry point is [`ChampionResolver::resolve_locale`] (or
//! [`resolve_entity`] for one-shot use); outcomes are accumulated in
//! [`ResolutionStats`].
pub mod ability;
pub mod champion;
pub mod config;
pub mod error;
pub mod expression;
pub mod formula;
pub mod locale;
pub mod naming;
pub mod records;
pub mod report;
pub mod substitute;
pub mod traits;
pub mod value;

pub use ability::{AbilityResolver, AbilityScope, BaseStats, shift_next};
pub use champion::{ChampionResolver, PASSIVE_KEY, SLOT_KEYS};
pub use config::ResolverConfig;
pub use error::{ErrorSeverity, ResolveError};
pub use expression::{Expr, MAX_EXPRESSION_DEPTH, evaluate_guarded};
pub use formula::{Calculation, FormulaPart, MAX_FORMULA_DEPTH, scaling_label};
pub use locale::{Locale, resource_name};
pub use naming::{AliasStrategy, normalize_alias, to_camel_case};
pub use records::{ChampionMeta, DataValue, PassiveMeta, SpellBundle, SpellData, SpellMeta};
pub use report::{ResolutionStats, UnresolvedPlaceholder};
pub use substitute::{Substitution, resolve_placeholder};
pub use traits::ValueLookup;
pub use value::{Value, align_lists, format_number, list_to_slash};

use serde_json::Value as JsonValue;

/// Builds a resolver for one champion and resolves one locale record with it.
///
/// Convenience wrapper around [`ChampionResolver::new`] and
/// [`ChampionResolver::resolve_locale`]; prefer building the resolver once when
/// resolving several locales.
pub fn resolve_entity(
    name: &str,
    meta: &ChampionMeta,
    bundle: &SpellBundle,
    base_record: &JsonValue,
    locale: &str,
    mut record: JsonValue,
    stats: &mut ResolutionStats,
) -> JsonValue {
    ChampionResolver::new(name, meta, bundle, base_record).resolve_locale(locale, &mut record, stats);
    record
}
