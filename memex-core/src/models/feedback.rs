use serde::{Deserialize, Serialize};

/// Aggregated user feedback for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeedbackScore {
    pub positive_count: u32,
    pub negative_count: u32,
    /// `positive_count - negative_count`.
    pub net_score: i64,
}

impl FeedbackScore {
    pub fn new(positive_count: u32, negative_count: u32) -> Self {
        Self {
            positive_count,
            negative_count,
            net_score: i64::from(positive_count) - i64::from(negative_count),
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.net_score == 0
    }
}
