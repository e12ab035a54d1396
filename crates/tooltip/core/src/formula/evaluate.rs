//! Formula evaluation logic.
//!
//! Evaluates [`Calculation`] trees against a [`ValueLookup`], producing a
//! [`Value`] whose scaling terms are labelled after the stat they scale with.

use crate::error::ResolveError;
use crate::formula::{Calculation, FormulaPart};
use crate::naming::to_camel_case;
use crate::traits::ValueLookup;
use crate::value::Value;

/// Maximum number of nested formula lookups while resolving one name.
pub const MAX_FORMULA_DEPTH: usize = 32;

/// Known stat fragments in data value names and their display labels.
///
/// Checked in order; the first fragment contained in the name wins.
const SCALING_LABEL_HINTS: [(&str, &str); 11] = [
    ("bonusad", "bonus AD"),
    ("totalad", "total AD"),
    ("ap", "AP"),
    ("armor", "Armor"),
    ("mr", "Magic Resist"),
    ("hp", "Health"),
    ("maxhp", "max Health"),
    ("missinghealth", "missing Health"),
    ("movespeed", "Move Speed"),
    ("attackspeed", "Attack Speed"),
    ("crit", "Critical Strike"),
];

// ============================================================================
// Formula Evaluation
// ============================================================================

/// Evaluate a calculation: the sum of all its parts, starting from zero.
pub fn evaluate(calculation: &Calculation, lookup: &impl ValueLookup) -> Result<Value, ResolveError> {
    sum_parts(&calculation.parts, lookup)
}

/// Evaluate a single calculation part.
///
/// ## Supported Parts
/// - `NamedDataValue`: whatever the lookup resolves the name to
/// - `StatByNamedDataValue`: base coefficients of the name, relabelled as a
///   scaling term (nested scaling terms are dropped)
/// - `Number`: constant
/// - `Product`: product of two parts (one side must be scalar)
/// - `Sum`: sum of sub-parts
///
/// ## Error Handling
/// - `UnsupportedCalculationPart` for unrecognized part kinds
/// - lookup and arithmetic errors propagate unchanged
pub fn evaluate_part(part: &FormulaPart, lookup: &impl ValueLookup) -> Result<Value, ResolveError> {
    match part {
        FormulaPart::NamedDataValue(name) => lookup.get_value(name),

        FormulaPart::StatByNamedDataValue(name) => {
            let value = lookup.get_value(name)?;
            let coeffs = value.base().map_or_else(|| vec![0.0], <[f64]>::to_vec);
            Ok(Value::from_scaling(coeffs, scaling_label(name)))
        }

        FormulaPart::Number(number) => Ok(Value::from_scalar(*number)),

        FormulaPart::Product(left, right) => {
            let left = evaluate_part(left, lookup)?;
            let right = evaluate_part(right, lookup)?;
            left.try_mul(&right)
        }

        FormulaPart::Sum(parts) => sum_parts(parts, lookup),

        FormulaPart::Unsupported(kind) => Err(ResolveError::UnsupportedCalculationPart(kind.clone())),
    }
}

fn sum_parts(parts: &[FormulaPart], lookup: &impl ValueLookup) -> Result<Value, ResolveError> {
    parts.iter().try_fold(Value::zero(), |total, part| {
        Ok(total + evaluate_part(part, lookup)?)
    })
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Display label for a stat-scaled data value name.
///
/// Falls back to the name's alphanumeric runs, lower-cased.
pub fn scaling_label(data_value_name: &str) -> String {
    let name = data_value_name.to_lowercase();
    SCALING_LABEL_HINTS
        .iter()
        .find(|(fragment, _)| name.contains(fragment))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| to_camel_case(data_value_name).to_lowercase())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct MapLookup(HashMap<&'static str, Value>);

    impl ValueLookup for MapLookup {
        fn get_value(&self, name: &str) -> Result<Value, ResolveError> {
            self.0
                .get(name)
                .cloned()
                .ok_or_else(|| ResolveError::UnknownPlaceholder {
                    name: name.to_string(),
                    ability: "test".to_string(),
                })
        }
    }

    fn lookup() -> MapLookup {
        MapLookup(HashMap::from([
            ("BaseDamage", Value::from_numbers([40.0, 65.0, 90.0])),
            ("BonusADRatio", Value::from_scalar(0.6)),
            ("APRatio", Value::from_numbers([0.3, 0.35, 0.4])),
            (
                "Mixed",
                Value::from_numbers([2.0]) + Value::from_scaling([9.0], "AP"),
            ),
        ]))
    }

    #[test]
    fn sums_named_and_scaled_parts() {
        let calc = Calculation::new(vec![
            FormulaPart::NamedDataValue("BaseDamage".into()),
            FormulaPart::StatByNamedDataValue("BonusADRatio".into()),
        ]);
        let value = evaluate(&calc, &lookup()).unwrap();
        assert_eq!(value.to_string(), "40/65/90 (+0.6 bonus AD)");
    }

    #[test]
    fn stat_scaling_keeps_only_base_coefficients() {
        let part = FormulaPart::StatByNamedDataValue("Mixed".into());
        let value = evaluate_part(&part, &lookup()).unwrap();
        assert_eq!(value.term("mixed"), Some(&[2.0][..]));
        assert_eq!(value.term("AP"), None);
    }

    #[test]
    fn stat_scaling_with_only_scaling_terms_is_zero() {
        let lookup = MapLookup(HashMap::from([("Ratio", Value::from_scaling([0.5], "AP"))]));
        let part = FormulaPart::StatByNamedDataValue("Ratio".into());
        let value = evaluate_part(&part, &lookup).unwrap();
        assert_eq!(value.term("ratio"), Some(&[0.0][..]));
    }

    #[test]
    fn products_and_nested_sums() {
        let calc = Calculation::new(vec![FormulaPart::Product(
            Box::new(FormulaPart::Sum(vec![
                FormulaPart::NamedDataValue("BaseDamage".into()),
                FormulaPart::Number(10.0),
            ])),
            Box::new(FormulaPart::Number(2.0)),
        )]);
        let value = evaluate(&calc, &lookup()).unwrap();
        assert_eq!(value.to_string(), "100/150/200");
    }

    #[test]
    fn product_of_two_rank_sequences_fails() {
        let part = FormulaPart::Product(
            Box::new(FormulaPart::NamedDataValue("BaseDamage".into())),
            Box::new(FormulaPart::NamedDataValue("APRatio".into())),
        );
        assert_eq!(evaluate_part(&part, &lookup()), Err(ResolveError::NonScalarProduct));
    }

    #[test]
    fn unsupported_parts_fail() {
        let calc = Calculation::new(vec![FormulaPart::Unsupported("Mystery".into())]);
        assert_eq!(
            evaluate(&calc, &lookup()),
            Err(ResolveError::UnsupportedCalculationPart("Mystery".into()))
        );
    }

    #[test]
    fn empty_calculation_is_zero() {
        let value = evaluate(&Calculation::default(), &lookup()).unwrap();
        assert_eq!(value, Value::zero());
    }

    #[test]
    fn scaling_labels() {
        assert_eq!(scaling_label("BonusADRatio"), "bonus AD");
        assert_eq!(scaling_label("TotalADRatio"), "total AD");
        assert_eq!(scaling_label("APRatio"), "AP");
        assert_eq!(scaling_label("ArmorRatio"), "Armor");
        assert_eq!(scaling_label("MRRatio"), "Magic Resist");
        assert_eq!(scaling_label("BonusHPRatio"), "Health");
        assert_eq!(scaling_label("MissingHealth"), "missing Health");
        // "healthpercent" contains "hp", which is checked first
        assert_eq!(scaling_label("MissingHealthPercent"), "Health");
        assert_eq!(scaling_label("CritChance"), "Critical Strike");
        assert_eq!(scaling_label("Lethality_Scale"), "lethalityscale");
    }
}
