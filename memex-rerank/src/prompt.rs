//! Scoring prompt construction.

use memex_core::models::{ChatMessage, ScoringDocument};

const SYSTEM_PROMPT: &str = "You are a relevance judge for a developer knowledge base. \
Given a query and numbered documents, rate how well each document answers the query \
on a scale from 0 (irrelevant) to 10 (exactly what was asked for).";

const ENTITY_INSTRUCTIONS: &str = "Pay close attention to named entities such as file \
paths, function names, packages, error codes and commands. When the query names an \
entity and a document is about a different one, treat it as a mismatch and score it \
low even if the topic is similar.";

const OUTPUT_INSTRUCTIONS: &str = "Respond with only a JSON array, one object per \
document, in the form [{\"id\": 1, \"score\": 7}]. Use the document number as the id.";

/// System and user messages for one scoring call.
pub fn build_messages(
    query: &str,
    documents: &[ScoringDocument],
    entity_aware: bool,
) -> Vec<ChatMessage> {
    let mut system = SYSTEM_PROMPT.to_string();
    if entity_aware {
        system.push(' ');
        system.push_str(ENTITY_INSTRUCTIONS);
    }

    let mut user = format!("Query: {}\n\nDocuments:\n", query.trim());
    for (i, doc) in documents.iter().enumerate() {
        user.push_str(&format!("[{}] {}\n", i + 1, doc.text.replace('\n', " ")));
    }
    user.push('\n');
    user.push_str(OUTPUT_INSTRUCTIONS);

    vec![ChatMessage::system(system), ChatMessage::user(user)]
}
