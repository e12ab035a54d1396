//! Resolution counters and diagnostics.

use serde::{Deserialize, Serialize};

/// Placeholder that failed to resolve and was left verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedPlaceholder {
    pub champion: String,
    /// Ability name, or `global` for fields outside any ability.
    pub ability: String,
    pub placeholder: String,
    pub message: String,
}

/// Outcome counts of one or more resolution passes.
///
/// Every placeholder that is not replaced counts as skipped; failures are
/// additionally recorded in `errors`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStats {
    pub replaced: usize,
    pub skipped: usize,
    pub errors: Vec<UnresolvedPlaceholder>,
}

impl ResolutionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_replaced(&mut self) {
        self.replaced += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    /// Records a failed placeholder: counted skipped, diagnostic kept.
    pub fn record_failure(&mut self, diagnostic: UnresolvedPlaceholder) {
        self.skipped += 1;
        self.errors.push(diagnostic);
    }

    /// Adds another accumulator's counts and diagnostics to this one.
    pub fn merge(&mut self, other: ResolutionStats) {
        self.replaced += other.replaced;
        self.skipped += other.skipped;
        self.errors.extend(other.errors);
    }

    /// Total placeholders visited.
    pub fn total(&self) -> usize {
        self.replaced + self.skipped
    }
}
