//! Placeholder substitution over localized text trees.
//!
//! Walks a `serde_json::Value` in place and rewrites every `{{ name }}` marker
//! inside string leaves. Each marker is resolved independently:
//!
//! ```text
//! {{ abilityresourcename }}   → champion resource name in the target locale
//! {{ spell.<ref>:<inner> }}   → <inner> resolved against another ability
//! {{ <expression> }}          → guarded expression against the current ability
//! ```
//!
//! ## Error Handling
//! Nothing aborts the walk. A marker that cannot be resolved stays verbatim
//! and is counted as skipped; failures are also logged and recorded in
//! [`ResolutionStats::errors`].

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value as JsonValue;

use crate::ability::AbilityResolver;
use crate::champion::ChampionResolver;
use crate::error::{ErrorSeverity, ResolveError};
use crate::expression::evaluate_guarded;
use crate::report::{ResolutionStats, UnresolvedPlaceholder};

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([^{}]+?)\s*\}\}").expect("valid regex"));

/// Placeholder that renders the champion's resource name.
const RESOURCE_PLACEHOLDER: &str = "abilityresourcename";

/// Prefix of cross-ability references.
const SPELL_PREFIX: &str = "spell.";

/// Ability name reported for fields outside any ability.
pub const GLOBAL_SCOPE: &str = "global";

// ============================================================================
// Substitution Driver
// ============================================================================

/// Substitution context: one champion, an optional current ability, a locale.
#[derive(Clone, Copy, Debug)]
pub struct Substitution<'a> {
    champion: &'a ChampionResolver,
    ability: Option<&'a AbilityResolver>,
    locale: &'a str,
}

impl<'a> Substitution<'a> {
    pub fn new(
        champion: &'a ChampionResolver,
        ability: Option<&'a AbilityResolver>,
        locale: &'a str,
    ) -> Self {
        Self {
            champion,
            ability,
            locale,
        }
    }

    /// Replaces placeholders in every string under `node`.
    pub fn apply(&self, node: &mut JsonValue, stats: &mut ResolutionStats) {
        match node {
            JsonValue::Object(fields) => {
                for value in fields.values_mut() {
                    self.apply(value, stats);
                }
            }
            JsonValue::Array(items) => {
                for item in items {
                    self.apply(item, stats);
                }
            }
            JsonValue::String(text) => {
                let replaced = match self.replace_text(text, stats) {
                    Cow::Borrowed(_) => None,
                    Cow::Owned(replaced) => Some(replaced),
                };
                if let Some(replaced) = replaced {
                    *text = replaced;
                }
            }
            _ => {}
        }
    }

    /// Replaces placeholders in one string.
    ///
    /// Returns the input unchanged (borrowed) when it holds no markers.
    pub fn replace_text<'t>(&self, text: &'t str, stats: &mut ResolutionStats) -> Cow<'t, str> {
        PLACEHOLDER_RE.replace_all(text, |caps: &Captures<'_>| {
            self.substitute(caps[1].trim(), stats)
                .unwrap_or_else(|| caps[0].to_string())
        })
    }

    /// Resolves one placeholder and records the outcome.
    ///
    /// Returns `None` when the marker must stay verbatim.
    fn substitute(&self, name: &str, stats: &mut ResolutionStats) -> Option<String> {
        if name.eq_ignore_ascii_case(RESOURCE_PLACEHOLDER) {
            return Some(self.champion.ability_resource(self.locale));
        }

        let result = match (spell_reference(name), self.ability) {
            (Some(reference), _) => resolve_spell_reference(self.champion, reference),
            (None, Some(ability)) => resolve_placeholder(self.champion, ability, name),
            (None, None) => {
                tracing::debug!(
                    champion = self.champion.name(),
                    placeholder = name,
                    "No ability context, placeholder left as is"
                );
                stats.record_skipped();
                return None;
            }
        };

        match result {
            Ok(text) => {
                stats.record_replaced();
                Some(text)
            }
            Err(error) if error.severity() == ErrorSeverity::Skip => {
                tracing::debug!(
                    champion = self.champion.name(),
                    ability = self.ability_name(),
                    placeholder = name,
                    %error,
                    "Placeholder skipped"
                );
                stats.record_skipped();
                None
            }
            Err(error) => {
                tracing::warn!(
                    champion = self.champion.name(),
                    ability = self.ability_name(),
                    placeholder = name,
                    code = error.error_code(),
                    %error,
                    "Unresolved placeholder"
                );
                stats.record_failure(UnresolvedPlaceholder {
                    champion: self.champion.name().to_string(),
                    ability: self.ability_name().to_string(),
                    placeholder: name.to_string(),
                    message: error.to_string(),
                });
                None
            }
        }
    }

    fn ability_name(&self) -> &str {
        self.ability.map_or(GLOBAL_SCOPE, AbilityResolver::name)
    }
}

// ============================================================================
// Placeholder Resolution
// ============================================================================

/// Resolves placeholder text against `ability` and formats the result.
///
/// `spell.<ref>:<inner>` is redirected to the referenced ability; anything
/// else goes through the guarded expression evaluator.
///
/// # Errors
///
/// Any [`ResolveError`]; `ComplexExpression` is the only skip.
pub fn resolve_placeholder(
    champion: &ChampionResolver,
    ability: &AbilityResolver,
    name: &str,
) -> Result<String, ResolveError> {
    match spell_reference(name) {
        Some(reference) => resolve_spell_reference(champion, reference),
        None => {
            let scope = ability.scope(champion.stats());
            evaluate_guarded(name, &scope).map(|value| value.to_string())
        }
    }
}

/// Resolves `<ref>:<inner>` (the text after `spell.`).
fn resolve_spell_reference(
    champion: &ChampionResolver,
    reference: &str,
) -> Result<String, ResolveError> {
    let (target, inner) = reference
        .split_once(':')
        .ok_or_else(|| ResolveError::MalformedSpellReference(format!("{SPELL_PREFIX}{reference}")))?;

    let ability = champion
        .find_ability(target)
        .ok_or_else(|| ResolveError::UnknownSpellReference(target.to_string()))?;

    resolve_placeholder(champion, ability, inner.trim())
}

/// Returns the text after a case-insensitive `spell.` prefix.
fn spell_reference(name: &str) -> Option<&str> {
    let prefix = name.get(..SPELL_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(SPELL_PREFIX)
        .then(|| &name[SPELL_PREFIX.len()..])
}
