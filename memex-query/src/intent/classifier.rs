use memex_core::constants::DEFAULT_INTENT_CONFIDENCE;
use memex_core::models::{ChatMessage, ChatRequest, ClassificationMethod, IntentKind, IntentResult};
use memex_core::traits::IChatClient;
use serde::Deserialize;
use tracing::{debug, warn};

use super::patterns::INTENT_RULES;

/// Confidence given to an LLM answer that omits one.
const LLM_FALLBACK_CONFIDENCE: f64 = 0.8;

const LLM_SYSTEM_PROMPT: &str = "You classify developer questions. \
Answer with a single JSON object {\"intent\": <one of how_to, debug, lookup, compare, configure, explore>, \
\"confidence\": <number between 0 and 1>} and nothing else.";

/// Maps query text to one of six intents.
///
/// Holds no mutable state; one instance can serve every query.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentClassifier;

#[derive(Deserialize)]
struct LlmIntent {
    intent: String,
    #[serde(default)]
    confidence: Option<f64>,
}

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify by pattern, falling back to `explore` when nothing matches.
    pub fn classify(&self, text: &str) -> IntentResult {
        let normalized = text.trim().to_lowercase();
        if !normalized.is_empty() {
            if let Some(rule) = INTENT_RULES.iter().find(|r| r.is_match(&normalized)) {
                return IntentResult {
                    intent: rule.intent,
                    confidence: rule.confidence,
                    method: ClassificationMethod::Pattern,
                };
            }
        }
        IntentResult {
            intent: IntentKind::Explore,
            confidence: DEFAULT_INTENT_CONFIDENCE,
            method: ClassificationMethod::Default,
        }
    }

    /// Ask `llm` first when given and available; any failure or unusable
    /// answer yields the pattern result.
    pub async fn classify_async(&self, text: &str, llm: Option<&dyn IChatClient>) -> IntentResult {
        let fallback = self.classify(text);
        let Some(client) = llm.filter(|c| c.is_available()) else {
            return fallback;
        };
        if text.trim().is_empty() {
            return fallback;
        }

        let request = ChatRequest::new(
            vec![
                ChatMessage::system(LLM_SYSTEM_PROMPT),
                ChatMessage::user(text.trim()),
            ],
            0.0,
        );
        match client.chat(&request).await {
            Ok(content) => match parse_llm_intent(&content) {
                Some(result) => {
                    debug!(intent = %result.intent, confidence = result.confidence, "llm intent");
                    result
                }
                None => {
                    debug!("llm intent unusable, using pattern result");
                    fallback
                }
            },
            Err(e) => {
                warn!(error = %e, "llm intent classification failed");
                fallback
            }
        }
    }
}

/// Pull `{"intent", "confidence"}` out of a reply that may carry prose.
fn parse_llm_intent(content: &str) -> Option<IntentResult> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    let parsed: LlmIntent = serde_json::from_str(&content[start..=end]).ok()?;
    let intent = IntentKind::parse(parsed.intent.trim().to_lowercase().as_str())?;
    let confidence = parsed
        .confidence
        .filter(|c| c.is_finite())
        .map_or(LLM_FALLBACK_CONFIDENCE, |c| c.clamp(0.0, 1.0));
    Some(IntentResult {
        intent,
        confidence,
        method: ClassificationMethod::Llm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_inside_prose() {
        let r = parse_llm_intent("Sure: {\"intent\": \"compare\", \"confidence\": 0.92} done").unwrap();
        assert_eq!(r.intent, IntentKind::Compare);
        assert_eq!(r.method, ClassificationMethod::Llm);
        assert!((r.confidence - 0.92).abs() < 1e-9);
    }

    #[test]
    fn unknown_intent_is_rejected() {
        assert!(parse_llm_intent("{\"intent\": \"summarize\"}").is_none());
        assert!(parse_llm_intent("no json here").is_none());
    }

    #[test]
    fn missing_confidence_uses_fallback() {
        let r = parse_llm_intent("{\"intent\": \"DEBUG\"}").unwrap();
        assert_eq!(r.intent, IntentKind::Debug);
        assert_eq!(r.confidence, LLM_FALLBACK_CONFIDENCE);
    }

    #[test]
    fn whitespace_only_is_default() {
        let r = IntentClassifier::new().classify("   ");
        assert_eq!(r.method, ClassificationMethod::Default);
    }
}
