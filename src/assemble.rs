//! Result assembly: catalog lookup, risk evaluation, comparison.
//!
//! One search produces exactly one [`ResultBundle`], the sole object handed
//! to the presentation layer. Assembly is synchronous and deterministic:
//! no I/O, no randomness, no wall-clock dependence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Catalog, Medicine};
use crate::query::SearchQuery;
use crate::risk::{compare, evaluate, ComparisonOutcome, RiskVerdict};

/// Assembly failures. The assembler never produces a partial bundle.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssembleError {
    #[error("No medicine data found for \"{0}\"")]
    NotFound(String),
}

/// One evaluated medicine within a result bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineReport {
    pub medicine: Medicine,
    pub verdict: RiskVerdict,
}

impl MedicineReport {
    /// The single plain-text summary handed to a speech service.
    pub fn narration(&self) -> String {
        format!(
            "{}. Category: {}. {} Risk for your condition: {}. {}",
            self.medicine.name,
            self.medicine.category,
            self.medicine.mechanism,
            self.verdict.level.as_str(),
            self.verdict.reason,
        )
    }
}

/// The fully assembled output of one search, ready for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub primary: MedicineReport,
    pub secondary: Option<MedicineReport>,
    pub comparison: Option<ComparisonOutcome>,
    pub query: SearchQuery,
}

/// Resolve a query against the catalog and evaluate it.
///
/// An unknown primary medicine fails the whole operation. An unresolvable or
/// self-referring secondary degrades silently to a single-medicine result;
/// the comparison runs only when both sides resolved.
pub fn assemble(query: &SearchQuery, catalog: &Catalog) -> Result<ResultBundle, AssembleError> {
    let primary_med = catalog
        .get(&query.primary)
        .ok_or_else(|| AssembleError::NotFound(query.primary.clone()))?;

    let secondary_med = query
        .secondary
        .as_deref()
        .filter(|name| *name != query.primary)
        .and_then(|name| catalog.get(name));

    let primary = MedicineReport {
        medicine: primary_med.clone(),
        verdict: evaluate(&query.conditions, primary_med),
    };
    let secondary = secondary_med.map(|med| MedicineReport {
        medicine: med.clone(),
        verdict: evaluate(&query.conditions, med),
    });

    let comparison = compare(
        &primary.medicine.name,
        &primary.verdict,
        secondary
            .as_ref()
            .map(|s| (s.medicine.name.as_str(), &s.verdict)),
    );

    tracing::info!(
        primary = %primary.medicine.name,
        primary_level = primary.verdict.level.as_str(),
        secondary = secondary.as_ref().map(|s| s.medicine.name.as_str()),
        conditions = query.conditions.len(),
        "assembled result bundle"
    );

    Ok(ResultBundle {
        primary,
        secondary,
        comparison,
        query: query.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Condition;
    use crate::risk::{ComparisonWinner, RiskLevel};

    fn query(conds: &[&str], primary: &str, secondary: Option<&str>) -> SearchQuery {
        SearchQuery::new(
            None,
            conds.iter().map(|c| Condition::new(*c)).collect(),
            primary,
            secondary.map(String::from),
        )
    }

    #[test]
    fn unknown_primary_fails_with_not_found() {
        let result = assemble(&query(&[], "Penicillin", None), Catalog::builtin());
        assert_eq!(result, Err(AssembleError::NotFound("Penicillin".into())));
    }

    #[test]
    fn unresolved_secondary_degrades_to_single_medicine() {
        let bundle =
            assemble(&query(&[], "Aspirin", Some("Penicillin")), Catalog::builtin()).unwrap();
        assert!(bundle.secondary.is_none());
        assert!(bundle.comparison.is_none());
    }

    #[test]
    fn single_medicine_bundle_has_no_comparison() {
        let bundle = assemble(&query(&[], "Aspirin", None), Catalog::builtin()).unwrap();
        assert_eq!(bundle.primary.verdict.level, RiskLevel::Safe);
        assert!(bundle.secondary.is_none());
        assert!(bundle.comparison.is_none());
    }

    #[test]
    fn two_medicine_bundle_compares_by_verdict() {
        let bundle = assemble(
            &query(&["Liver Disease"], "Paracetamol", Some("Ibuprofen")),
            Catalog::builtin(),
        )
        .unwrap();
        assert_eq!(bundle.primary.verdict.level, RiskLevel::Avoid);
        let secondary = bundle.secondary.as_ref().unwrap();
        assert_eq!(secondary.verdict.level, RiskLevel::Safe);
        assert_eq!(
            bundle.comparison.unwrap().winner,
            ComparisonWinner::Medicine("Ibuprofen".into())
        );
    }

    #[test]
    fn assembly_is_deterministic() {
        let q = query(&["Asthma", "Stomach Ulcer"], "Ibuprofen", Some("Aspirin"));
        let first = assemble(&q, Catalog::builtin()).unwrap();
        let second = assemble(&q, Catalog::builtin()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn narration_covers_name_category_mechanism_and_verdict() {
        let bundle =
            assemble(&query(&["Liver Disease"], "Paracetamol", None), Catalog::builtin()).unwrap();
        let text = bundle.primary.narration();
        assert!(text.starts_with("Paracetamol. Category: Analgesic / Antipyretic."));
        assert!(text.contains("Risk for your condition: AVOID."));
        assert!(text.contains("\"Liver Disease\""));
    }

    #[test]
    fn bundle_serializes_to_json() {
        let bundle = assemble(&query(&[], "Aspirin", None), Catalog::builtin()).unwrap();
        let json = serde_json::to_string(&bundle).unwrap();
        assert!(json.contains("\"SAFE\""));
        assert!(json.contains("Aspirin"));
    }
}
