use serde::{Deserialize, Serialize};

use super::domain::CandidateId;
use super::service::RankedCandidate;

/// Aggregate statistics over a ranked candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary {
    pub count: usize,
    pub mean_score: f64,
    pub top_candidate_id: Option<CandidateId>,
}

impl RankingSummary {
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean_score: 0.0,
            top_candidate_id: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Reduce a ranked list to its count, mean score, and leading candidate.
///
/// The input order is trusted: the top candidate is whatever comes first, even if the slice was
/// never passed through [`CandidateRanker::rank`](super::CandidateRanker::rank).
pub fn summarize_candidates(candidates: &[RankedCandidate]) -> RankingSummary {
    let Some(first) = candidates.first() else {
        return RankingSummary::empty();
    };

    let total: f64 = candidates.iter().map(|candidate| candidate.score).sum();
    RankingSummary {
        count: candidates.len(),
        mean_score: total / candidates.len() as f64,
        top_candidate_id: Some(first.candidate_id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{Candidate, CandidateRanker};

    fn ranked(id: &str, score: f64) -> RankedCandidate {
        RankedCandidate {
            candidate_id: CandidateId::from(id),
            score,
        }
    }

    #[test]
    fn summarize_candidates_non_empty() {
        let ranker = CandidateRanker::default();
        let ranked = ranker.rank(&[
            Candidate::new("x", 0.8, 0.9),
            Candidate::new("y", 0.4, 0.3),
        ]);

        let summary = summarize_candidates(&ranked);

        assert_eq!(summary.count, 2);
        assert_eq!(summary.top_candidate_id, Some(ranked[0].candidate_id.clone()));
        assert_eq!(summary.top_candidate_id, Some(CandidateId::from("x")));
        assert!((0.0..=1.0).contains(&summary.mean_score));
    }

    #[test]
    fn summarize_candidates_empty() {
        let summary = summarize_candidates(&[]);

        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_score, 0.0);
        assert!(summary.top_candidate_id.is_none());
        assert!(summary.is_empty());
    }

    #[test]
    fn mean_score_is_arithmetic_mean() {
        let summary = summarize_candidates(&[ranked("a", 1.0), ranked("b", 0.5), ranked("c", 0.0)]);

        assert_eq!(summary.count, 3);
        assert!((summary.mean_score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn top_candidate_follows_input_order_without_resorting() {
        let summary = summarize_candidates(&[ranked("low", 0.1), ranked("high", 0.9)]);

        assert_eq!(summary.top_candidate_id, Some(CandidateId::from("low")));
    }
}
