use std::cmp::Ordering;

use super::types::{ComparisonOutcome, ComparisonWinner, RiskVerdict};

/// Derive the relative-safety judgment between two verdicts.
///
/// Returns `None` when no second medicine was supplied or when the second
/// name equals the first (self-comparison is not a comparison). Higher score
/// is safer; equal scores are an explicit [`ComparisonWinner::Tie`]. Pure
/// function of its inputs.
pub fn compare(
    primary_name: &str,
    primary: &RiskVerdict,
    secondary: Option<(&str, &RiskVerdict)>,
) -> Option<ComparisonOutcome> {
    let (secondary_name, secondary) = secondary?;
    if secondary_name == primary_name {
        return None;
    }

    let winner = match primary.score.cmp(&secondary.score) {
        Ordering::Greater => ComparisonWinner::Medicine(primary_name.to_string()),
        Ordering::Less => ComparisonWinner::Medicine(secondary_name.to_string()),
        Ordering::Equal => ComparisonWinner::Tie,
    };

    Some(ComparisonOutcome {
        winner,
        primary_fill: gauge_fill(primary.score),
        secondary_fill: gauge_fill(secondary.score),
    })
}

/// Normalized gauge percentage for a verdict score.
fn gauge_fill(score: u8) -> f32 {
    f32::from(score) / 3.0 * 100.0
}
