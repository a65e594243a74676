/// Retrieval pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("candidate discovery failed: {reason}")]
    CandidateDiscovery { reason: String },

    #[error("stage `{stage}` failed: {reason}")]
    StageFailed { stage: String, reason: String },
}
