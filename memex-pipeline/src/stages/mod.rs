//! The built-in stages, in pipeline order.

mod cross_encoder;
mod discovery;
mod expansion;
mod feedback;
mod limit;
mod query_analysis;
mod related_to;

pub use cross_encoder::CrossEncoderStage;
pub use discovery::DiscoveryStage;
pub use expansion::ExpansionStage;
pub use feedback::{feedback_multiplier, FeedbackLoadStage, FeedbackScoringStage};
pub use limit::LimitStage;
pub use query_analysis::QueryAnalysisStage;
pub use related_to::RelatedToStage;

/// Stage names as they appear in reports and logs.
pub mod names {
    pub const QUERY_ANALYSIS: &str = "query_analysis";
    pub const DISCOVERY: &str = "discovery";
    pub const RELATED_TO: &str = "related_to";
    pub const EXPANSION: &str = "expansion";
    pub const FEEDBACK: &str = "feedback";
    pub const FEEDBACK_SCORING: &str = "feedback_scoring";
    pub const CROSS_ENCODER: &str = "cross_encoder";
    pub const LIMIT: &str = "limit";
}
