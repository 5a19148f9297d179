pub mod config;
pub mod error;
pub mod import;
pub mod ranking;
pub mod telemetry;
pub mod verifiers;

pub use ranking::{
    normalize_score, summarize_candidates, Candidate, CandidateId, CandidateRanker,
    RankedCandidate, RankingError, RankingSummary,
};
