//! Spell calculation formulas.
//!
//! Spell bundles describe derived quantities as trees of calculation parts:
//!
//! ```text
//! mSpellCalculations:
//!   TotalDamage:
//!     mFormulaParts:
//!       - NamedDataValueCalculationPart        { mDataValue: BaseDamage }
//!       - StatByNamedDataValueCalculationPart  { mDataValue: BonusADRatio }
//! ```
//!
//! A [`Calculation`] is the sum of its parts. Parts nest through
//! [`FormulaPart::Product`] and [`FormulaPart::Sum`].

pub mod evaluate;

pub use evaluate::{MAX_FORMULA_DEPTH, evaluate, evaluate_part, scaling_label};

use serde::Deserialize;

use crate::records::null_to_default;

// ============================================================================
// Formula Definition
// ============================================================================

/// Named formula: the sum of its parts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Calculation {
    #[serde(rename = "mFormulaParts", default, deserialize_with = "null_to_default")]
    pub parts: Vec<FormulaPart>,
}

impl Calculation {
    pub fn new(parts: Vec<FormulaPart>) -> Self {
        Self { parts }
    }
}

/// One node of a calculation tree.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawFormulaPart")]
pub enum FormulaPart {
    /// Value of a data value (or any other resolvable name).
    NamedDataValue(String),

    /// Base coefficients of a data value turned into a scaling term.
    StatByNamedDataValue(String),

    /// Constant.
    Number(f64),

    /// Product of two sub-parts; one side must be scalar.
    Product(Box<FormulaPart>, Box<FormulaPart>),

    /// Sum of sub-parts.
    Sum(Vec<FormulaPart>),

    /// Part kind this evaluator does not understand.
    Unsupported(String),
}

/// Raw calculation part as it appears in spell bundles.
#[derive(Deserialize)]
struct RawFormulaPart {
    #[serde(rename = "__type", default)]
    kind: Option<String>,
    #[serde(rename = "mDataValue", default)]
    data_value: Option<String>,
    #[serde(rename = "mNumber", default)]
    number: Option<f64>,
    #[serde(rename = "mPart1", default)]
    part1: Option<Box<FormulaPart>>,
    #[serde(rename = "mPart2", default)]
    part2: Option<Box<FormulaPart>>,
    #[serde(rename = "mSubparts", default)]
    subparts: Option<Vec<FormulaPart>>,
    #[serde(rename = "mFormulaParts", default)]
    formula_parts: Option<Vec<FormulaPart>>,
}

impl From<RawFormulaPart> for FormulaPart {
    fn from(raw: RawFormulaPart) -> Self {
        let empty = || Box::new(FormulaPart::Sum(Vec::new()));
        match raw.kind.as_deref() {
            Some("NamedDataValueCalculationPart") => {
                FormulaPart::NamedDataValue(raw.data_value.unwrap_or_default())
            }
            Some("StatByNamedDataValueCalculationPart") => {
                FormulaPart::StatByNamedDataValue(raw.data_value.unwrap_or_default())
            }
            Some("NumberCalculationPart") => FormulaPart::Number(raw.number.unwrap_or(0.0)),
            Some("ProductOfSubPartsCalculationPart") => FormulaPart::Product(
                raw.part1.unwrap_or_else(empty),
                raw.part2.unwrap_or_else(empty),
            ),
            Some("SumOfSubPartsCalculationPart") => {
                FormulaPart::Sum(raw.subparts.unwrap_or_default())
            }
            // Nested calculation objects carry their parts directly
            _ if raw.formula_parts.is_some() => {
                FormulaPart::Sum(raw.formula_parts.unwrap_or_default())
            }
            Some(other) => FormulaPart::Unsupported(other.to_string()),
            None => FormulaPart::Unsupported("<untyped>".to_string()),
        }
    }
}
