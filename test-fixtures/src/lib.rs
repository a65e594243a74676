//! Shared test support for the memex workspace.
//!
//! - [`store`]: an in-memory storage collaborator (entries, relations,
//!   feedback) with call counters and failure switches.
//! - [`chat`]: a scripted chat client for LLM-backed stages.
//! - [`builders`]: terse constructors for the four entry variants.
//! - golden JSON under `test-fixtures/golden`, found from any crate by
//!   walking up from `CARGO_MANIFEST_DIR`.

pub mod builders;
pub mod chat;
pub mod store;

use std::path::PathBuf;

use memex_core::models::RelationEdge;
use memex_core::MemoryEntry;
use serde::de::DeserializeOwned;

pub use chat::ScriptedChatClient;
pub use store::InMemoryStore;

/// Root directory of the golden fixtures.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures").join("golden")
}

/// Absolute path of a golden file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a golden file as text.
///
/// # Panics
/// Panics if the file cannot be read.
pub fn load_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Read and deserialize a JSON golden file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// The sample corpus: a dozen entries across all four types.
pub fn sample_corpus() -> Vec<MemoryEntry> {
    load_fixture("entries/sample_corpus.json")
}

/// Relation edges over the sample corpus, plus one project node.
pub fn sample_edges() -> Vec<RelationEdge> {
    load_fixture("relations/sample_edges.json")
}

/// A store holding the sample corpus and edges.
pub fn sample_store() -> InMemoryStore {
    InMemoryStore::new()
        .with_entries(sample_corpus())
        .with_edges(sample_edges())
}
