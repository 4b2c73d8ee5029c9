//! Reason-string templates for risk verdicts.
//! Every verdict points the patient back to a professional; no verdict is
//! worded as medical advice.

/// Template builder for verdict reasons.
pub struct MessageTemplates;

impl MessageTemplates {
    /// SAFE: nothing was selected, so nothing was checked.
    pub fn no_conditions() -> String {
        "No health condition selected; no known conflicts were checked.".to_string()
    }

    /// AVOID: a selected condition is contraindicated.
    pub fn avoid(condition: &str) -> String {
        format!(
            "This medicine should be AVOIDED with \"{}\". It may significantly \
             worsen this condition or cause serious harm. Consult your doctor \
             immediately.",
            condition,
        )
    }

    /// CAUTION: one or more selected conditions require extra care.
    pub fn caution(conditions: &str) -> String {
        format!(
            "Use with CAUTION if you have \"{}\". This medicine can interact \
             with this condition. Always inform your healthcare provider.",
            conditions,
        )
    }

    /// SAFE: selections checked, no conflict found.
    pub fn no_conflict() -> String {
        "No known conflict between this medicine and your selected condition(s). \
         Always verify with a licensed healthcare professional."
            .to_string()
    }
}
