use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for ranked candidates.
///
/// Ordering follows the natural ordering of the underlying string, which is what the ranking
/// tie-break relies on. Uniqueness is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

impl CandidateId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CandidateId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single item to score and rank.
///
/// Relevance and confidence are expected to lie in `[0.0, 1.0]` but are not validated; the
/// ranker clamps the combined score instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub candidate_id: CandidateId,
    pub relevance: f64,
    pub confidence: f64,
}

impl Candidate {
    pub fn new(candidate_id: impl Into<CandidateId>, relevance: f64, confidence: f64) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            relevance,
            confidence,
        }
    }
}

/// Clamp a score into `[0.0, 1.0]`.
///
/// Values already inside the range are returned untouched. `NaN` and negative zero map to
/// `0.0` so every downstream score stays inside the range and sorts consistently.
pub fn normalize_score(value: f64) -> f64 {
    if value.is_nan() || value <= 0.0 {
        return 0.0;
    }
    if value > 1.0 {
        return 1.0;
    }
    value
}
