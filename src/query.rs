//! Search query and its transport codec.
//!
//! A query travels between two independent program activations (input stage
//! and results stage) as a single encoded string with keys `disease`,
//! `conditions`, `med1`, and `med2`. Absent optionals are omitted entirely;
//! values are percent-encoded so the round trip is total over free text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Condition;

/// Codec-level validation failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("Encoded query has no primary medicine")]
    MissingPrimaryMedicine,
}

/// One user request: optional disease free-text, selected conditions in
/// picking order, a required primary medicine, and an optional second
/// medicine to compare against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub disease: Option<String>,
    pub conditions: Vec<Condition>,
    pub primary: String,
    pub secondary: Option<String>,
}

impl SearchQuery {
    /// Build a normalized query: empty optionals become `None`, and a
    /// secondary equal to the primary collapses to no comparison.
    pub fn new(
        disease: Option<String>,
        conditions: Vec<Condition>,
        primary: impl Into<String>,
        secondary: Option<String>,
    ) -> Self {
        let primary = primary.into();
        Self {
            disease: disease.filter(|d| !d.is_empty()),
            conditions,
            secondary: secondary.filter(|s| !s.is_empty() && *s != primary),
            primary,
        }
    }

    /// Serialize to the transport string. Fields are omitted when absent;
    /// `med1` is always present for a query built through [`SearchQuery::new`].
    pub fn encode(&self) -> String {
        let mut parts = Vec::with_capacity(4);
        if let Some(disease) = self.disease.as_deref().filter(|d| !d.is_empty()) {
            parts.push(format!("disease={}", urlencoding::encode(disease)));
        }
        if !self.conditions.is_empty() {
            let joined = self
                .conditions
                .iter()
                .map(Condition::as_str)
                .collect::<Vec<_>>()
                .join(",");
            parts.push(format!("conditions={}", urlencoding::encode(&joined)));
        }
        parts.push(format!("med1={}", urlencoding::encode(&self.primary)));
        if let Some(secondary) = self
            .secondary
            .as_deref()
            .filter(|s| !s.is_empty() && *s != self.primary)
        {
            parts.push(format!("med2={}", urlencoding::encode(secondary)));
        }
        parts.join("&")
    }

    /// Parse a transport string back into a normalized query.
    ///
    /// Permissive about optionals: unknown keys, malformed pairs, undecodable
    /// and empty values are all ignored. A missing `med1` is the only
    /// failure; malformed garbage therefore funnels into
    /// [`QueryError::MissingPrimaryMedicine`] rather than a parse error.
    pub fn decode(encoded: &str) -> Result<Self, QueryError> {
        let mut disease = None;
        let mut conditions = Vec::new();
        let mut primary = None;
        let mut secondary = None;

        for pair in encoded.split('&') {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let Ok(value) = urlencoding::decode(raw) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let value = value.into_owned();
            match key {
                "disease" => disease = Some(value),
                "conditions" => {
                    conditions = value
                        .split(',')
                        .filter(|c| !c.is_empty())
                        .map(Condition::new)
                        .collect();
                }
                "med1" => primary = Some(value),
                "med2" => secondary = Some(value),
                _ => {}
            }
        }

        let primary = primary.ok_or(QueryError::MissingPrimaryMedicine)?;
        Ok(Self::new(disease, conditions, primary, secondary))
    }
}
