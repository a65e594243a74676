pub mod chat;
pub mod cross_encoder;
pub mod entity;
pub mod feedback;
pub mod filters;
pub mod intent;
pub mod relation;
pub mod result_item;
pub mod scoring;

pub use chat::{ChatMessage, ChatRequest, ChatRole};
pub use cross_encoder::CrossEncoderMeta;
pub use entity::{EntityType, ExtractedEntity};
pub use feedback::FeedbackScore;
pub use filters::{EntryFilter, QueryFilters, RelatedTo, ScopeFilter, TagFilter, TemporalFilter};
pub use intent::{ClassificationMethod, IntentKind, IntentResult};
pub use relation::{Direction, NodeRef, NodeType, RelationEdge, RelationType};
pub use result_item::ResultItem;
pub use scoring::{RelevanceScore, ScoringDocument};
