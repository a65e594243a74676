use memex_core::constants::{clamp_depth, clamp_score, MAX_TRAVERSAL_DEPTH, MIN_TRAVERSAL_DEPTH};
use memex_core::models::FeedbackScore;
use proptest::prelude::*;

proptest! {
    #[test]
    fn clamped_scores_are_bounded(score in prop::num::f64::ANY) {
        let s = clamp_score(score);
        prop_assert!((0.0..=1.0).contains(&s));
    }

    #[test]
    fn in_range_scores_are_untouched(score in 0.0f64..=1.0) {
        prop_assert_eq!(clamp_score(score), score);
    }

    #[test]
    fn clamped_depth_is_bounded(depth in any::<u32>()) {
        let d = clamp_depth(depth);
        prop_assert!((MIN_TRAVERSAL_DEPTH..=MAX_TRAVERSAL_DEPTH).contains(&d));
    }

    #[test]
    fn net_feedback_is_the_difference(positive in any::<u32>(), negative in any::<u32>()) {
        let score = FeedbackScore::new(positive, negative);
        prop_assert_eq!(score.net_score, i64::from(positive) - i64::from(negative));
        prop_assert_eq!(score.is_neutral(), positive == negative);
    }
}
