//! Name normalization shared by ability aliases and placeholder lookups.
//!
//! Placeholder text, champion metadata and spell bundles disagree on casing and
//! separators (`Q_Damage`, `qdamage`, `QDamage`). Lookups therefore go through a
//! small set of explicit normalizations instead of ad-hoc string munging.

/// Lower-cases and drops every character that is not `a-z` or `0-9`.
pub fn normalize_alias(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Capitalizes each alphanumeric run of the lower-cased name and joins them.
///
/// `base_damage` and `base.damage` both become `BaseDamage`.
pub fn to_camel_case(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// One way of turning a raw reference into an alias-table key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AliasStrategy {
    /// Camel-cased, then lower-cased (separators removed).
    CamelLower,
    /// Only lower-case ASCII letters and digits kept.
    Alphanumeric,
    /// Lower-cased verbatim.
    RawLower,
}

impl AliasStrategy {
    /// Strategies tried, in order, when resolving `spell.<ref>` references.
    pub const SPELL_REFERENCE: [AliasStrategy; 3] = [
        AliasStrategy::CamelLower,
        AliasStrategy::Alphanumeric,
        AliasStrategy::RawLower,
    ];

    /// Applies this normalization to `raw`.
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Self::CamelLower => to_camel_case(raw).to_lowercase(),
            Self::Alphanumeric => normalize_alias(raw),
            Self::RawLower => raw.to_lowercase(),
        }
    }
}
