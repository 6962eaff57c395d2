//! Decision rule trait

use scd_core::{Result, Verdict};

/// Static properties of a decision rule
pub trait DecisionRuleProperties {
    /// Name used in logs and reports
    fn algorithm_name(&self) -> &'static str;

    /// Smallest intervention phase the rule can judge
    fn minimum_intervention_points(&self) -> usize;

    /// Largest intervention phase the rule can judge
    fn maximum_intervention_points(&self) -> usize;

    /// Whether an intervention phase of `len` points is supported
    fn supports_intervention_len(&self, len: usize) -> bool {
        (self.minimum_intervention_points()..=self.maximum_intervention_points()).contains(&len)
    }
}

/// Emulated visual inspection of one baseline/intervention pair
pub trait DecisionRule: DecisionRuleProperties {
    /// Decide whether the intervention phase shows an effect
    fn decide(&self, baseline: &[f64], intervention: &[f64]) -> Result<Verdict>;
}
