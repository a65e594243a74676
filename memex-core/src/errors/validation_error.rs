/// Caller-supplied parameters are missing or contradictory.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("relation query needs a source or a target anchor")]
    MissingAnchor,

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
