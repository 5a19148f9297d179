//! Candidate scoring, ranking, and summary reduction.
//!
//! Raw candidates flow through [`CandidateRanker::rank`] into a sorted list of
//! [`RankedCandidate`]s, which [`summarize_candidates`] reduces to a [`RankingSummary`].

pub mod domain;
pub mod evaluation;
pub mod service;

pub use domain::{normalize_score, Candidate, CandidateId};
pub use evaluation::{summarize_candidates, RankingSummary};
pub use service::{
    CandidateRanker, RankedCandidate, RankingError, DEFAULT_CONFIDENCE_WEIGHT,
    DEFAULT_RELEVANCE_WEIGHT,
};
