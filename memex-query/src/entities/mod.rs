//! Entity extraction.

mod extractor;
pub mod patterns;
mod stop_words;
pub mod variants;

pub use extractor::{EntityExtractor, ExtractorOptions};
