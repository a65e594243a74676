use memex_core::constants::clamp_score;

/// `alpha * cross + (1 - alpha) * original`, clamped to [0, 1].
pub fn blend(alpha: f64, cross: f64, original: f64) -> f64 {
    clamp_score(alpha * cross + (1.0 - alpha) * original)
}
