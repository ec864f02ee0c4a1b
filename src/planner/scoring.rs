use crate::models::{MacroTotals, TargetProfile};
use crate::planner::constants::SCORE_EPSILON;

/// Sum of per-macro relative errors against the targets.
///
/// Only macros present in `targets` contribute. Each macro counts equally
/// regardless of magnitude, so calories (hundreds to thousands) and grams
/// (tens to hundreds) are compared on equal footing. A zero target makes
/// any nonzero total maximally penalized through the epsilon guard.
pub fn score_totals(totals: &MacroTotals, targets: &TargetProfile) -> f64 {
    targets
        .iter()
        .map(|(m, target)| (totals.get(*m) - target).abs() / (target + SCORE_EPSILON))
        .sum()
}
