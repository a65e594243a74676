use memex_core::models::ScoringDocument;
use memex_rerank::blend::blend;
use memex_rerank::parse::{detect_scale, parse_scores};
use proptest::prelude::*;

fn docs(n: usize) -> Vec<ScoringDocument> {
    (0..n)
        .map(|i| ScoringDocument::new(format!("tool:{i}"), format!("doc {i}")))
        .collect()
}

proptest! {
    #[test]
    fn blend_stays_in_unit_range(
        alpha in 0.0f64..=1.0,
        cross in -5.0f64..5.0,
        original in -5.0f64..5.0,
    ) {
        let s = blend(alpha, cross, original);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn any_reply_yields_one_bounded_score_per_document(
        reply in ".{0,200}",
        n in 0usize..8,
    ) {
        let documents = docs(n);
        let scores = parse_scores(&reply, &documents);
        prop_assert_eq!(scores.len(), n);
        for (score, doc) in scores.iter().zip(&documents) {
            prop_assert_eq!(&score.id, &doc.id);
            prop_assert!((0.0..=1.0).contains(&score.score));
        }
    }

    #[test]
    fn numeric_arrays_yield_bounded_scores(
        raw in prop::collection::vec(-20.0f64..200.0, 1..10),
    ) {
        let reply = serde_json::to_string(&raw).unwrap();
        let scores = parse_scores(&reply, &docs(raw.len()));
        for score in &scores {
            prop_assert!((0.0..=1.0).contains(&score.score));
        }
    }

    #[test]
    fn scale_never_shrinks_as_max_grows(a in 0.0f64..150.0, b in 0.0f64..150.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(detect_scale(&[lo]) <= detect_scale(&[hi]));
    }
}
