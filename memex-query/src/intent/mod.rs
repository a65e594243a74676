//! Intent classification: ordered pattern sets with an optional LLM pass.

mod classifier;
pub mod patterns;

pub use classifier::IntentClassifier;
