/// memex system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shallowest relation traversal accepted; smaller inputs are raised to this.
pub const MIN_TRAVERSAL_DEPTH: u32 = 1;

/// Deepest relation traversal accepted; larger inputs are lowered to this.
pub const MAX_TRAVERSAL_DEPTH: u32 = 5;

/// Score given to a candidate when the scorer had no usable opinion.
pub const NEUTRAL_RELEVANCE: f64 = 0.5;

/// Confidence reported when no intent pattern matched.
pub const DEFAULT_INTENT_CONFIDENCE: f64 = 0.5;

/// Lower and upper bound for every score leaving a pipeline stage.
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 1.0;

/// Clamp a score into `[MIN_SCORE, MAX_SCORE]`. NaN collapses to the floor.
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return MIN_SCORE;
    }
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Clamp a requested traversal depth into the accepted range.
pub fn clamp_depth(depth: u32) -> u32 {
    depth.clamp(MIN_TRAVERSAL_DEPTH, MAX_TRAVERSAL_DEPTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(1.7), 1.0);
        assert_eq!(clamp_score(-0.2), 0.0);
        assert_eq!(clamp_score(0.42), 0.42);
        assert_eq!(clamp_score(f64::NAN), 0.0);
    }

    #[test]
    fn clamp_depth_bounds() {
        assert_eq!(clamp_depth(0), 1);
        assert_eq!(clamp_depth(3), 3);
        assert_eq!(clamp_depth(10), 5);
    }
}
