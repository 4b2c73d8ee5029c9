use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// SAFE / CAUTION / AVOID classification of one medicine against the user's
/// selected conditions. Ordered worst-first so `Ord` agrees with the score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Avoid,
    Caution,
    Safe,
}

impl RiskLevel {
    /// Numeric ordering score: lower is worse.
    pub fn score(self) -> u8 {
        match self {
            Self::Avoid => 1,
            Self::Caution => 2,
            Self::Safe => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avoid => "AVOID",
            Self::Caution => "CAUTION",
            Self::Safe => "SAFE",
        }
    }

    /// Presentation tag mirroring the level.
    pub fn tag(self) -> RiskTag {
        match self {
            Self::Avoid => RiskTag::Avoid,
            Self::Caution => RiskTag::Caution,
            Self::Safe => RiskTag::Safe,
        }
    }
}

// ---------------------------------------------------------------------------
// RiskTag
// ---------------------------------------------------------------------------

/// Lowercase presentation tag used by the card/table templating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskTag {
    Safe,
    Caution,
    Avoid,
}

impl RiskTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Avoid => "avoid",
        }
    }
}

// ---------------------------------------------------------------------------
// RiskVerdict
// ---------------------------------------------------------------------------

/// The verdict for one medicine. A derived value, recomputed on every query;
/// never persisted or mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub level: RiskLevel,
    /// Ordering score, `level.score()`. Carried for presentation scaling.
    pub score: u8,
    /// Patient-facing explanation of the classification.
    pub reason: String,
    pub tag: RiskTag,
}

impl RiskVerdict {
    pub fn new(level: RiskLevel, reason: String) -> Self {
        Self {
            level,
            score: level.score(),
            reason,
            tag: level.tag(),
        }
    }
}

// ---------------------------------------------------------------------------
// ComparisonOutcome
// ---------------------------------------------------------------------------

/// Which side of a two-medicine comparison is safer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonWinner {
    /// The named medicine scored strictly higher.
    Medicine(String),
    /// Equal scores; explicitly a tie, never resolved to either side.
    Tie,
}

/// The relative-safety judgment between two verdicts, plus the normalized
/// gauge fill for each side (`score / 3 * 100`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    pub winner: ComparisonWinner,
    pub primary_fill: f32,
    pub secondary_fill: f32,
}
