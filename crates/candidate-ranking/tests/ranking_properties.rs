use candidate_ranking::{
    normalize_score, summarize_candidates, Candidate, CandidateRanker, RankedCandidate,
};
use proptest::prelude::*;

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    ("[a-e]{1,3}", -2.0f64..3.0, -2.0f64..3.0)
        .prop_map(|(id, relevance, confidence)| Candidate::new(id, relevance, confidence))
}

fn arb_ranker() -> impl Strategy<Value = CandidateRanker> {
    (0.0f64..10.0, 0.01f64..10.0).prop_map(|(relevance, confidence)| {
        CandidateRanker::new(relevance, confidence).expect("positive total weight")
    })
}

fn is_ranked(ranked: &[RankedCandidate]) -> bool {
    ranked.windows(2).all(|pair| {
        let (a, b) = (&pair[0], &pair[1]);
        a.score > b.score || (a.score == b.score && a.candidate_id <= b.candidate_id)
    })
}

proptest! {
    #[test]
    fn normalize_stays_in_unit_interval(value in proptest::num::f64::ANY) {
        let normalized = normalize_score(value);
        prop_assert!((0.0..=1.0).contains(&normalized));
        if (0.0..=1.0).contains(&value) {
            prop_assert_eq!(normalized, value);
        } else if value < 0.0 {
            prop_assert_eq!(normalized, 0.0);
        } else if value > 1.0 {
            prop_assert_eq!(normalized, 1.0);
        }
    }

    #[test]
    fn scores_stay_in_unit_interval(ranker in arb_ranker(), candidate in arb_candidate()) {
        let score = ranker.score(&candidate);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn normalized_weights_sum_to_one(ranker in arb_ranker()) {
        let total = ranker.relevance_weight() + ranker.confidence_weight();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn rank_output_is_sorted_and_stable(
        ranker in arb_ranker(),
        candidates in proptest::collection::vec(arb_candidate(), 0..24),
    ) {
        let ranked = ranker.rank(&candidates);

        prop_assert_eq!(ranked.len(), candidates.len());
        prop_assert!(is_ranked(&ranked));
        prop_assert_eq!(&ranked, &ranker.rank(&candidates));
    }

    #[test]
    fn summary_matches_ranked_sequence(
        candidates in proptest::collection::vec(arb_candidate(), 0..24),
    ) {
        let ranked = CandidateRanker::default().rank(&candidates);
        let summary = summarize_candidates(&ranked);

        prop_assert_eq!(summary.count, ranked.len());
        prop_assert_eq!(
            summary.top_candidate_id,
            ranked.first().map(|candidate| candidate.candidate_id.clone())
        );
        prop_assert!((0.0..=1.0).contains(&summary.mean_score));
    }
}
