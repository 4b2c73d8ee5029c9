use crate::catalog::{Condition, Medicine};

use super::messages::MessageTemplates;
use super::types::{RiskLevel, RiskVerdict};

/// Classify one medicine against the user's selected conditions.
///
/// Strict priority order: empty selection is SAFE, any contraindicated match
/// is AVOID (even when other selections would only warrant caution), any
/// caution match is CAUTION, otherwise SAFE. Matching respects selection
/// order: the AVOID reason names the first matching condition the user
/// picked, and the CAUTION reason lists all matches in picking order.
///
/// Never fails; callers resolve the medicine name against the catalog first.
pub fn evaluate(user_conditions: &[Condition], medicine: &Medicine) -> RiskVerdict {
    if user_conditions.is_empty() {
        return RiskVerdict::new(RiskLevel::Safe, MessageTemplates::no_conditions());
    }

    if let Some(hit) = user_conditions.iter().find(|c| medicine.avoid.contains(*c)) {
        return RiskVerdict::new(RiskLevel::Avoid, MessageTemplates::avoid(hit.as_str()));
    }

    let caution_hits: Vec<&str> = user_conditions
        .iter()
        .filter(|c| medicine.caution.contains(*c))
        .map(Condition::as_str)
        .collect();
    if !caution_hits.is_empty() {
        return RiskVerdict::new(
            RiskLevel::Caution,
            MessageTemplates::caution(&caution_hits.join(", ")),
        );
    }

    RiskVerdict::new(RiskLevel::Safe, MessageTemplates::no_conflict())
}
