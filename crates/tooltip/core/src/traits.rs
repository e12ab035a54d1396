//! Lookup seam between evaluators and ability data.

use crate::error::ResolveError;
use crate::value::Value;

/// Resolves a placeholder identifier to a [`Value`].
///
/// Both the expression evaluator and the formula evaluator pull names through
/// this trait, so they can be driven by an ability scope in production and by
/// a plain map in tests.
pub trait ValueLookup {
    /// Resolves `name` (raw placeholder text, any casing).
    fn get_value(&self, name: &str) -> Result<Value, ResolveError>;
}

impl<T: ValueLookup + ?Sized> ValueLookup for &T {
    fn get_value(&self, name: &str) -> Result<Value, ResolveError> {
        (**self).get_value(name)
    }
}
