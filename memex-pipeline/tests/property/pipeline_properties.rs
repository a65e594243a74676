use std::collections::HashSet;

use memex_core::config::FeedbackConfig;
use memex_core::{IntentKind, ResultItem};
use memex_pipeline::executor::enforce_invariants;
use memex_pipeline::relevance::{query_terms, QuerySignals};
use memex_pipeline::stages::feedback_multiplier;
use memex_query::{EntityExtractor, ExtractorOptions};
use proptest::prelude::*;
use test_fixtures::sample_corpus;

const STOP_SAMPLE: &[&str] = &["the", "how", "to", "with", "and", "is"];

proptest! {
    #[test]
    fn invariants_leave_unique_bounded_results(
        picks in prop::collection::vec((0usize..12, -2.0f64..3.0), 0..30),
    ) {
        let corpus = sample_corpus();
        let mut results: Vec<ResultItem> = picks
            .iter()
            .map(|(i, score)| ResultItem {
                score: *score,
                entry: corpus[i % corpus.len()].clone(),
            })
            .collect();
        let first_keys: Vec<_> = {
            let mut seen = HashSet::new();
            results.iter().map(|r| r.key()).filter(|k| seen.insert(k.clone())).collect()
        };

        enforce_invariants(&mut results);

        let keys: Vec<_> = results.iter().map(|r| r.key()).collect();
        prop_assert_eq!(keys, first_keys);
        for item in &results {
            prop_assert!((0.0..=1.0).contains(&item.score));
        }
    }

    #[test]
    fn discovery_score_is_bounded(
        search in "[a-z ]{0,40}",
        intent_index in 0usize..6,
        boost in 1.0f64..3.0,
    ) {
        let extractor = EntityExtractor::new(ExtractorOptions::default());
        let entities = extractor.extract(&search);
        let signals = QuerySignals::new(
            Some(&search),
            &entities,
            Some(IntentKind::ALL[intent_index]),
            &extractor,
        );
        for entry in sample_corpus() {
            if let Some(score) = signals.score(&entry, boost) {
                prop_assert!((0.0..=1.0).contains(&score));
            }
        }
    }

    #[test]
    fn query_terms_drop_stop_words_and_repeats(
        words in prop::collection::vec("[a-z]{1,8}", 0..12),
    ) {
        let mut search = words.join(" ");
        search.push(' ');
        search.push_str(&STOP_SAMPLE.join(" "));
        let terms = query_terms(&search);
        let unique: HashSet<_> = terms.iter().collect();
        prop_assert_eq!(unique.len(), terms.len());
        for term in &terms {
            prop_assert!(!STOP_SAMPLE.contains(&term.as_str()));
            prop_assert!(term.chars().count() >= 2);
        }
    }

    #[test]
    fn feedback_multiplier_stays_within_caps(net in -1_000i64..1_000) {
        let config = FeedbackConfig::default();
        let m = feedback_multiplier(net, &config);
        prop_assert!(m >= 1.0 - config.max_penalty - 1e-12);
        prop_assert!(m <= 1.0 + config.max_boost + 1e-12);
        if net > 0 {
            prop_assert!(m >= 1.0);
        } else if net < 0 {
            prop_assert!(m <= 1.0);
        }
    }
}
