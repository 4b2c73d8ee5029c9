//! Medicine catalog and the recognized condition list.
//!
//! The catalog is an immutable, read-only table built once at startup from
//! bundled JSON. Every evaluation shares it; nothing writes to it after load.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recognized health conditions, in selection-widget order.
pub const RECOGNIZED_CONDITIONS: [&str; 8] = [
    "Asthma",
    "Diabetes",
    "High Blood Pressure",
    "Liver Disease",
    "Stomach Ulcer",
    "Bleeding Disorder",
    "Kidney Disease",
    "Heart Disease",
];

/// A named health condition selected by the user.
///
/// Names outside [`RECOGNIZED_CONDITIONS`] are carried inertly: the evaluator
/// simply never matches them against a medicine's risk profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is in the fixed recognized enumeration.
    pub fn is_recognized(&self) -> bool {
        RECOGNIZED_CONDITIONS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Condition {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// One step of a medicine's journey through the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanismStep {
    pub icon: String,
    pub label: String,
    pub desc: String,
}

/// A catalog entry describing a drug's use, mechanism, and risk profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medicine {
    /// Unique catalog key.
    pub name: String,
    pub used_for: String,
    pub category: String,
    pub icon: String,
    pub mechanism: String,
    pub treats: String,
    pub description: String,
    /// Conditions this medicine is contraindicated with.
    pub avoid: Vec<Condition>,
    /// Conditions requiring extra care; `avoid` wins when both would match.
    pub caution: Vec<Condition>,
    pub side_effects: String,
    pub learn_more: String,
    pub did_you_know: Vec<String>,
    pub who_cannot: Vec<String>,
    pub steps: Vec<MechanismStep>,
}

/// Catalog load/validation errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog JSON parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate medicine name: {0}")]
    DuplicateName(String),
}

/// The immutable medicine catalog: ordered entries plus a name index.
pub struct Catalog {
    entries: Vec<Medicine>,
    index: HashMap<String, usize>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(include_str!("../resources/medicines.json"))
        .expect("bundled medicine catalog is valid")
});

impl Catalog {
    /// Build a catalog from entries, rejecting duplicate names.
    pub fn new(entries: Vec<Medicine>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, med) in entries.iter().enumerate() {
            if index.insert(med.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateName(med.name.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Parse a catalog from a JSON array of medicine records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<Medicine> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// The bundled catalog, parsed once on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Look up a medicine by exact name.
    pub fn get(&self, name: &str) -> Option<&Medicine> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// All medicines in authored (selection-widget) order.
    pub fn medicines(&self) -> impl Iterator<Item = &Medicine> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_medicine(name: &str) -> Medicine {
        Medicine {
            name: name.into(),
            used_for: "test".into(),
            category: "test".into(),
            icon: String::new(),
            mechanism: "test".into(),
            treats: "test".into(),
            description: "test".into(),
            avoid: vec![],
            caution: vec![],
            side_effects: String::new(),
            learn_more: String::new(),
            did_you_know: vec![],
            who_cannot: vec![],
            steps: vec![],
        }
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("Paracetamol").is_some());
        assert!(catalog.get("Ibuprofen").is_some());
        assert!(catalog.get("Aspirin").is_some());
    }

    #[test]
    fn unknown_name_returns_none() {
        assert!(Catalog::builtin().get("Penicillin").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive_exact_match() {
        assert!(Catalog::builtin().get("paracetamol").is_none());
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = Catalog::new(vec![stub_medicine("Aspirin"), stub_medicine("Aspirin")]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(n)) if n == "Aspirin"));
    }

    #[test]
    fn authored_order_preserved() {
        let names: Vec<&str> = Catalog::builtin().medicines().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Paracetamol", "Ibuprofen", "Aspirin"]);
    }

    #[test]
    fn builtin_risk_sets_are_disjoint_and_recognized() {
        for med in Catalog::builtin().medicines() {
            for cond in &med.avoid {
                assert!(cond.is_recognized(), "{}: avoid {cond}", med.name);
                assert!(
                    !med.caution.contains(cond),
                    "{}: {cond} in both avoid and caution",
                    med.name
                );
            }
            for cond in &med.caution {
                assert!(cond.is_recognized(), "{}: caution {cond}", med.name);
            }
        }
    }

    #[test]
    fn builtin_entries_have_card_content() {
        for med in Catalog::builtin().medicines() {
            assert!(!med.steps.is_empty(), "{} has no mechanism steps", med.name);
            assert!(!med.did_you_know.is_empty(), "{} has no facts", med.name);
            assert!(!med.who_cannot.is_empty(), "{} has no exclusions", med.name);
        }
    }

    #[test]
    fn condition_recognition() {
        assert!(Condition::new("Asthma").is_recognized());
        assert!(!Condition::new("Sore Throat").is_recognized());
    }
}
