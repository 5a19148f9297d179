use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{normalize_score, Candidate, CandidateId};
use crate::config::RankingConfig;

pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 0.7;
pub const DEFAULT_CONFIDENCE_WEIGHT: f64 = 0.3;

/// Candidate paired with its normalized score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate_id: CandidateId,
    pub score: f64,
}

/// Errors raised while configuring a ranker.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error(
        "weights must be finite and sum to > 0 (relevance {relevance_weight}, confidence {confidence_weight})"
    )]
    InvalidConfiguration {
        relevance_weight: f64,
        confidence_weight: f64,
    },
}

/// Ranks candidates using a weighted relevance-confidence score.
///
/// The weights are stored normalized so they always sum to `1.0`. The ranker holds no other
/// state and can be shared freely once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateRanker {
    relevance_weight: f64,
    confidence_weight: f64,
}

impl CandidateRanker {
    pub fn new(relevance_weight: f64, confidence_weight: f64) -> Result<Self, RankingError> {
        let invalid = RankingError::InvalidConfiguration {
            relevance_weight,
            confidence_weight,
        };
        if !relevance_weight.is_finite() || !confidence_weight.is_finite() {
            return Err(invalid);
        }

        // Scale by the larger magnitude first so huge weights cannot overflow the sum.
        let scale = relevance_weight.abs().max(confidence_weight.abs());
        if scale == 0.0 {
            return Err(invalid);
        }
        let relevance = relevance_weight / scale;
        let confidence = confidence_weight / scale;
        let total = relevance + confidence;
        if total <= 0.0 {
            return Err(invalid);
        }

        let ranker = Self {
            relevance_weight: relevance / total,
            confidence_weight: confidence / total,
        };
        debug!(
            relevance_weight = ranker.relevance_weight,
            confidence_weight = ranker.confidence_weight,
            "candidate ranker configured"
        );
        Ok(ranker)
    }

    pub fn from_config(config: &RankingConfig) -> Result<Self, RankingError> {
        Self::new(config.relevance_weight, config.confidence_weight)
    }

    pub fn relevance_weight(&self) -> f64 {
        self.relevance_weight
    }

    pub fn confidence_weight(&self) -> f64 {
        self.confidence_weight
    }

    pub fn score(&self, candidate: &Candidate) -> f64 {
        let value = self.relevance_weight * candidate.relevance
            + self.confidence_weight * candidate.confidence;
        normalize_score(value)
    }

    /// Score every candidate and order the results by descending score, then ascending id.
    pub fn rank<'a, I>(&self, candidates: I) -> Vec<RankedCandidate>
    where
        I: IntoIterator<Item = &'a Candidate>,
    {
        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|candidate| RankedCandidate {
                candidate_id: candidate.candidate_id.clone(),
                score: self.score(candidate),
            })
            .collect();

        ranked.sort_by(ranking_order);
        debug!(count = ranked.len(), "ranked candidates");
        ranked
    }
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self {
            relevance_weight: DEFAULT_RELEVANCE_WEIGHT,
            confidence_weight: DEFAULT_CONFIDENCE_WEIGHT,
        }
    }
}

// Scores are normalized before sorting, so `total_cmp` never sees NaN or negative zero.
fn ranking_order(left: &RankedCandidate, right: &RankedCandidate) -> Ordering {
    right
        .score
        .total_cmp(&left.score)
        .then_with(|| left.candidate_id.cmp(&right.candidate_id))
}
