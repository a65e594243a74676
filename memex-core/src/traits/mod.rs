mod llm;
mod storage;

pub use llm::{IChatClient, IRelevanceScorer};
pub use storage::{IEntryStore, IFeedbackStore, IRelationStore};
