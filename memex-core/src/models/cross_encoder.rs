use serde::{Deserialize, Serialize};

/// Attached to the pipeline context only when the cross-encoder actually ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossEncoderMeta {
    pub applied: bool,
    pub candidates_scored: usize,
    pub processing_time_ms: u64,
}
