/// Failures reported by the storage collaborator.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{operation} failed: {reason}")]
    QueryFailed { operation: String, reason: String },

    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },
}
