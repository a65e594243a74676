use async_trait::async_trait;
use memex_core::errors::LlmError;
use memex_core::models::{ChatRequest, ClassificationMethod, IntentKind};
use memex_core::traits::IChatClient;
use memex_core::MemexResult;
use memex_query::IntentClassifier;

struct FixedReply {
    available: bool,
    reply: MemexResult<String>,
}

#[async_trait]
impl IChatClient for FixedReply {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn chat(&self, _request: &ChatRequest) -> MemexResult<String> {
        match &self.reply {
            Ok(s) => Ok(s.clone()),
            Err(_) => Err(LlmError::MissingContent.into()),
        }
    }
}

#[test]
fn how_to_outranks_configure() {
    let r = IntentClassifier::new().classify("how to set up CI/CD");
    assert_eq!(r.intent, IntentKind::HowTo);
    assert_eq!(r.method, ClassificationMethod::Pattern);
}

#[test]
fn unmatched_text_is_explore_default() {
    let r = IntentClassifier::new().classify("xyz abc 123");
    assert_eq!(r.intent, IntentKind::Explore);
    assert_eq!(r.confidence, 0.5);
    assert_eq!(r.method, ClassificationMethod::Default);
}

#[test]
fn each_intent_has_a_representative() {
    let c = IntentClassifier::new();
    let cases = [
        ("How do I write a migration?", IntentKind::HowTo),
        ("tests failing with a timeout", IntentKind::Debug),
        ("what is the retry policy", IntentKind::Lookup),
        ("postgres vs sqlite for caching", IntentKind::Compare),
        ("enable verbose logging", IntentKind::Configure),
    ];
    for (text, expected) in cases {
        assert_eq!(c.classify(text).intent, expected, "{text}");
    }
}

#[test]
fn debug_outranks_lookup() {
    let r = IntentClassifier::new().classify("what is causing this error");
    assert_eq!(r.intent, IntentKind::Debug);
}

#[test]
fn text_is_trimmed_and_lowercased() {
    let r = IntentClassifier::new().classify("   FIND the deploy script  ");
    assert_eq!(r.intent, IntentKind::Lookup);
}

#[tokio::test]
async fn async_without_client_matches_sync() {
    let c = IntentClassifier::new();
    let text = "why does the build crash";
    assert_eq!(c.classify_async(text, None).await, c.classify(text));
}

#[tokio::test]
async fn async_uses_llm_answer() {
    let client = FixedReply {
        available: true,
        reply: Ok(r#"{"intent": "compare", "confidence": 0.9}"#.to_string()),
    };
    let r = IntentClassifier::new()
        .classify_async("tell me about caching", Some(&client))
        .await;
    assert_eq!(r.intent, IntentKind::Compare);
    assert_eq!(r.method, ClassificationMethod::Llm);
}

#[tokio::test]
async fn async_falls_back_when_unavailable() {
    let client = FixedReply {
        available: false,
        reply: Ok(r#"{"intent": "compare"}"#.to_string()),
    };
    let r = IntentClassifier::new()
        .classify_async("how to set up CI/CD", Some(&client))
        .await;
    assert_eq!(r.intent, IntentKind::HowTo);
    assert_eq!(r.method, ClassificationMethod::Pattern);
}

#[tokio::test]
async fn async_falls_back_on_error_or_garbage() {
    let c = IntentClassifier::new();
    let failing = FixedReply {
        available: true,
        reply: Err(LlmError::MissingContent.into()),
    };
    let garbage = FixedReply {
        available: true,
        reply: Ok("I think it is about debugging".to_string()),
    };
    let clients: [&dyn IChatClient; 2] = [&failing, &garbage];
    for client in clients {
        let r = c.classify_async("xyz abc 123", Some(client)).await;
        assert_eq!(r.intent, IntentKind::Explore);
        assert_eq!(r.method, ClassificationMethod::Default);
    }
}
