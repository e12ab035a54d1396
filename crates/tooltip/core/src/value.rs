//! Rank-indexed numeric values with labelled scaling terms.
//!
//! A [`Value`] is a sum of independent terms. The unlabelled base term holds the
//! flat amount per rank; every other term is a named scaling contribution such
//! as `bonus AD`. Coefficient sequences hold one entry per ability rank and may
//! have different lengths: before two sequences are combined they are aligned
//! (empty → zeros, single entry → broadcast, otherwise the last rank repeats).
//!
//! ```
//! # use tooltip_core::Value;
//! let damage = Value::from_numbers([10.0, 20.0, 30.0])
//!     + Value::from_scaling([0.6], "bonus AD");
//! assert_eq!(damage.to_string(), "10/20/30 (+0.6 bonus AD)");
//! ```

use std::fmt;
use std::ops::{Add, Neg, Sub};

use indexmap::IndexMap;

use crate::error::ResolveError;

/// Coefficients closer to zero than this are hidden from display.
const ZERO_TOLERANCE: f64 = 1e-8;

/// Numbers this close to an integer print without a fractional part.
const INTEGER_TOLERANCE: f64 = 1e-6;

/// A quantity expressed as labelled per-rank coefficient sequences.
///
/// Term labels keep first-seen order, which is also their display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Value {
    terms: IndexMap<String, Vec<f64>>,
}

impl Value {
    /// Label of the unscaled base term.
    pub const BASE: &'static str = "";

    /// Creates a value whose base term is `numbers`.
    pub fn from_numbers(numbers: impl IntoIterator<Item = f64>) -> Self {
        Self::from_term(Self::BASE, numbers.into_iter().collect())
    }

    /// Creates a rank-invariant base value.
    pub fn from_scalar(number: f64) -> Self {
        Self::from_numbers([number])
    }

    /// Creates a value holding a single scaling term.
    pub fn from_scaling(coeffs: impl IntoIterator<Item = f64>, label: impl Into<String>) -> Self {
        Self::from_term(label, coeffs.into_iter().collect())
    }

    /// Scalar zero, the identity for summation.
    pub fn zero() -> Self {
        Self::from_scalar(0.0)
    }

    fn from_term(label: impl Into<String>, coeffs: Vec<f64>) -> Self {
        let mut terms = IndexMap::new();
        terms.insert(label.into(), coeffs);
        Self { terms }
    }

    /// Returns the coefficients stored under `label`.
    pub fn term(&self, label: &str) -> Option<&[f64]> {
        self.terms.get(label).map(Vec::as_slice)
    }

    /// Returns the base term coefficients.
    pub fn base(&self) -> Option<&[f64]> {
        self.term(Self::BASE)
    }

    /// True when the value has exactly one term holding exactly one coefficient.
    pub fn is_scalar(&self) -> bool {
        self.scalar().is_some()
    }

    /// Returns the single coefficient of a scalar value.
    pub fn scalar(&self) -> Option<f64> {
        if self.terms.len() != 1 {
            return None;
        }
        match self.terms.values().next() {
            Some(coeffs) if coeffs.len() == 1 => Some(coeffs[0]),
            _ => None,
        }
    }

    /// Number of ranks displayed: the longest term, at least 1.
    pub fn length(&self) -> usize {
        self.terms
            .values()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Returns a copy with every term expanded to [`Value::length`] ranks.
    pub fn padded(&self) -> Self {
        let length = self.length();
        let terms = self
            .terms
            .iter()
            .map(|(label, coeffs)| (label.clone(), expand(coeffs, length)))
            .collect();
        Self { terms }
    }

    /// Multiplies by a scalar operand.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NonScalarProduct`] when neither operand is scalar.
    pub fn try_mul(&self, other: &Value) -> Result<Value, ResolveError> {
        if let Some(factor) = other.scalar() {
            return Ok(self.scale(factor));
        }
        if let Some(factor) = self.scalar() {
            return Ok(other.scale(factor));
        }
        Err(ResolveError::NonScalarProduct)
    }

    /// Divides by a scalar divisor.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NonScalarDivisor`] when `other` is not scalar and
    /// [`ResolveError::DivisionByZero`] when it is zero.
    pub fn try_div(&self, other: &Value) -> Result<Value, ResolveError> {
        let divisor = other.scalar().ok_or(ResolveError::NonScalarDivisor)?;
        if divisor == 0.0 {
            return Err(ResolveError::DivisionByZero);
        }
        Ok(self.map(|x| x / divisor))
    }

    fn scale(&self, factor: f64) -> Value {
        self.map(|x| x * factor)
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Value {
        let terms = self
            .terms
            .iter()
            .map(|(label, coeffs)| (label.clone(), coeffs.iter().copied().map(&f).collect()))
            .collect();
        Value { terms }
    }

    /// Adds `other` term by term; `sign` is applied to `other` first.
    fn merge(&self, other: &Value, sign: f64) -> Value {
        let mut out = self.clone();
        for (label, coeffs) in &other.terms {
            let signed: Vec<f64> = coeffs.iter().map(|x| x * sign).collect();
            match out.terms.get_mut(label) {
                Some(existing) => {
                    let (left, right) = align_lists(existing, &signed);
                    *existing = left.iter().zip(&right).map(|(a, b)| a + b).collect();
                }
                None => {
                    out.terms.insert(label.clone(), signed);
                }
            }
        }
        out
    }
}

impl Add<&Value> for &Value {
    type Output = Value;

    fn add(self, rhs: &Value) -> Value {
        self.merge(rhs, 1.0)
    }
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        &self + &rhs
    }
}

impl Sub<&Value> for &Value {
    type Output = Value;

    fn sub(self, rhs: &Value) -> Value {
        self.merge(rhs, -1.0)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        &self - &rhs
    }
}

impl Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        self.map(|x| -x)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        -&self
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padded = self.padded();
        let base = padded
            .terms
            .get(Self::BASE)
            .cloned()
            .unwrap_or_else(|| vec![0.0; padded.length()]);

        let mut out = list_to_slash(&base);
        for (label, coeffs) in &padded.terms {
            if label.is_empty() || coeffs.iter().all(|x| x.abs() < ZERO_TOLERANCE) {
                continue;
            }
            let formatted = list_to_slash(coeffs);
            let sign = if formatted.starts_with('-') { "" } else { "+" };
            out.push_str(&format!(" ({sign}{formatted} {label})"));
        }
        f.write_str(out.trim())
    }
}

/// Aligns two coefficient sequences to the longer length.
///
/// An empty sequence becomes zeros, a single entry is broadcast, and anything
/// else is padded by repeating its last entry.
pub fn align_lists(a: &[f64], b: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let length = a.len().max(b.len());
    (expand(a, length), expand(b, length))
}

fn expand(values: &[f64], length: usize) -> Vec<f64> {
    match values {
        [] => vec![0.0; length],
        _ if values.len() >= length => values.to_vec(),
        [single] => vec![*single; length],
        [.., last] => {
            let mut out = values.to_vec();
            out.resize(length, *last);
            out
        }
    }
}

/// Formats per-rank numbers as `a/b/c`, collapsing rank-invariant sequences.
pub fn list_to_slash(values: &[f64]) -> String {
    if values.is_empty() {
        return "0".to_string();
    }
    let formatted: Vec<String> = values.iter().copied().map(format_number).collect();
    if formatted.iter().all(|x| *x == formatted[0]) {
        return formatted[0].clone();
    }
    formatted.join("/")
}

/// Formats a number for tooltip display: integers plain, otherwise up to
/// three decimals without trailing zeros.
pub fn format_number(value: f64) -> String {
    // `+ 0.0` folds -0 into 0
    let rounded = value.round() + 0.0;
    if (value - rounded).abs() < INTEGER_TOLERANCE {
        return format!("{rounded:.0}");
    }
    let fixed = format!("{value:.3}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
