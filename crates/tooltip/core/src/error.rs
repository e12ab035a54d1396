//! Error taxonomy for placeholder resolution.
//!
//! Every error raised while resolving a single placeholder is a [`ResolveError`].
//! The substitution driver never lets one escape: each error is classified by
//! [`ErrorSeverity`] and the placeholder is left in place.
//!
//! - **Skip**: the placeholder is valid but intentionally not evaluated
//!   (expressions needing more than one variable, comparisons, calls).
//! - **Failure**: something about the placeholder or the ability data is
//!   wrong. The failure is logged and recorded as a diagnostic.

/// How the substitution driver treats a resolution error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Expected outcome: leave the marker and count it as skipped.
    Skip,

    /// Unexpected outcome: leave the marker, count it as skipped and record
    /// a diagnostic.
    Failure,
}

/// Errors raised while resolving one placeholder.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// Expression is outside the single-variable arithmetic subset.
    #[error("Expression requires complex calculation: {0}")]
    ComplexExpression(String),

    /// Expression text could not be parsed, or nests too deeply.
    #[error("Invalid expression syntax in '{expression}': {message}")]
    InvalidSyntax { expression: String, message: String },

    /// Parsed expression node the evaluator does not support.
    #[error("Unsupported expression: {0}")]
    UnsupportedExpression(String),

    /// Calculation part with an unrecognized `__type`.
    #[error("Unsupported calculation part '{0}'")]
    UnsupportedCalculationPart(String),

    /// Name not found anywhere in the resolution cascade.
    #[error("Unknown placeholder '{name}' for ability {ability}")]
    UnknownPlaceholder { name: String, ability: String },

    /// `spell.<ref>:...` names an ability the champion does not have.
    #[error("Unknown spell reference '{0}'")]
    UnknownSpellReference(String),

    /// `spell.` placeholder without the `:<expression>` part.
    #[error("Malformed spell reference '{0}'")]
    MalformedSpellReference(String),

    /// Both multiplication operands vary by rank or carry several terms.
    #[error("Multiplication of non-scalar values is not supported")]
    NonScalarProduct,

    /// Divisor varies by rank or carries several terms.
    #[error("Division by non-scalar values is not supported")]
    NonScalarDivisor,

    /// Scalar divisor is zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Effect burn entry contains a piece that is not a number.
    #[error("Invalid effect burn value '{0}'")]
    InvalidEffectBurn(String),

    /// Formula references nest too deeply (usually a self-referencing formula).
    #[error("Formula nesting exceeds {limit} levels while resolving '{name}'")]
    FormulaDepthExceeded { name: String, limit: usize },
}

impl ResolveError {
    /// Returns how the substitution driver should treat this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ComplexExpression(_) => ErrorSeverity::Skip,
            _ => ErrorSeverity::Failure,
        }
    }

    /// Returns a stable identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        use ResolveError::*;
        match self {
            ComplexExpression(_) => "RESOLVE_COMPLEX_EXPRESSION",
            InvalidSyntax { .. } => "RESOLVE_INVALID_SYNTAX",
            UnsupportedExpression(_) => "RESOLVE_UNSUPPORTED_EXPRESSION",
            UnsupportedCalculationPart(_) => "RESOLVE_UNSUPPORTED_CALCULATION_PART",
            UnknownPlaceholder { .. } => "RESOLVE_UNKNOWN_PLACEHOLDER",
            UnknownSpellReference(_) => "RESOLVE_UNKNOWN_SPELL_REFERENCE",
            MalformedSpellReference(_) => "RESOLVE_MALFORMED_SPELL_REFERENCE",
            NonScalarProduct => "RESOLVE_NON_SCALAR_PRODUCT",
            NonScalarDivisor => "RESOLVE_NON_SCALAR_DIVISOR",
            DivisionByZero => "RESOLVE_DIVISION_BY_ZERO",
            InvalidEffectBurn(_) => "RESOLVE_INVALID_EFFECT_BURN",
            FormulaDepthExceeded { .. } => "RESOLVE_FORMULA_DEPTH_EXCEEDED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_complex_expressions_are_skips() {
        assert_eq!(
            ResolveError::ComplexExpression("e1+e2".into()).severity(),
            ErrorSeverity::Skip
        );
        assert_eq!(ResolveError::NonScalarProduct.severity(), ErrorSeverity::Failure);
        assert_eq!(
            ResolveError::UnknownPlaceholder {
                name: "foo".into(),
                ability: "AhriQ".into(),
            }
            .severity(),
            ErrorSeverity::Failure
        );
    }

    #[test]
    fn display_includes_context() {
        let err = ResolveError::UnknownPlaceholder {
            name: "totaldamage".into(),
            ability: "AhriQ".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown placeholder 'totaldamage' for ability AhriQ"
        );
        assert_eq!(err.error_code(), "RESOLVE_UNKNOWN_PLACEHOLDER");
    }
}
