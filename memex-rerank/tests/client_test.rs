//! Wire tests against a one-shot local HTTP server.

use memex_core::errors::LlmError;
use memex_core::models::{ChatMessage, ChatRequest};
use memex_core::traits::IChatClient;
use memex_core::MemexError;
use memex_rerank::OpenAiCompatClient;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct Captured {
    head: String,
    body: serde_json::Value,
}

/// Serve one request with `status` and `body`, optionally after a delay.
async fn serve_once(
    status: &'static str,
    body: &'static str,
    delay_ms: u64,
) -> (String, oneshot::Receiver<Captured>, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let (head_end, content_length) = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                break (pos + 4, length);
            }
        };
        while buf.len() < head_end + content_length {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let req_body = serde_json::from_slice(&buf[head_end..]).unwrap_or(serde_json::Value::Null);
        let _ = tx.send(Captured { head, body: req_body });

        if delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
        }
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    (format!("http://{addr}/v1"), rx, handle)
}

fn request() -> ChatRequest {
    ChatRequest::new(
        vec![ChatMessage::system("judge"), ChatMessage::user("rate this")],
        0.1,
    )
}

#[tokio::test]
async fn sends_openai_shape_and_returns_content() {
    let (url, captured, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"[{\"id\":1,\"score\":7}]"}}]}"#,
        0,
    )
    .await;
    let client = OpenAiCompatClient::new(
        url,
        "qwen2.5:7b",
        Some("secret".to_string()),
        Some("low".to_string()),
        5_000,
    )
    .unwrap();

    let content = client.chat(&request()).await.unwrap();
    assert_eq!(content, r#"[{"id":1,"score":7}]"#);

    let captured = captured.await.unwrap();
    assert!(captured.head.starts_with("POST /v1/chat/completions "));
    assert!(captured.head.to_lowercase().contains("authorization: bearer secret"));
    assert_eq!(captured.body["model"], "qwen2.5:7b");
    assert_eq!(captured.body["temperature"], 0.1);
    assert_eq!(captured.body["reasoning_effort"], "low");
    assert_eq!(captured.body["messages"][0]["role"], "system");
    assert_eq!(captured.body["messages"][1]["content"], "rate this");
    server.await.unwrap();
}

#[tokio::test]
async fn no_key_means_no_authorization_header() {
    let (url, captured, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"content":"ok"}}]}"#,
        0,
    )
    .await;
    let client = OpenAiCompatClient::new(url, "m", None, None, 5_000).unwrap();
    client.chat(&request()).await.unwrap();

    let captured = captured.await.unwrap();
    assert!(!captured.head.to_lowercase().contains("authorization:"));
    assert!(captured.body.get("reasoning_effort").is_none());
    server.await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_upstream_error() {
    let (url, _captured, server) =
        serve_once("503 Service Unavailable", r#"{"error":"busy"}"#, 0).await;
    let client = OpenAiCompatClient::new(url, "m", None, None, 5_000).unwrap();
    let err = client.chat(&request()).await.unwrap_err();
    match err {
        MemexError::Llm(LlmError::UpstreamStatus { status, body }) => {
            assert_eq!(status, 503);
            assert!(body.contains("busy"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    server.await.unwrap();
}

#[tokio::test]
async fn empty_choices_is_missing_content() {
    let (url, _captured, server) = serve_once("200 OK", r#"{"choices":[]}"#, 0).await;
    let client = OpenAiCompatClient::new(url, "m", None, None, 5_000).unwrap();
    let err = client.chat(&request()).await.unwrap_err();
    assert!(matches!(err, MemexError::Llm(LlmError::MissingContent)));
    server.await.unwrap();
}

#[tokio::test]
async fn slow_server_times_out() {
    let (url, _captured, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"content":"late"}}]}"#,
        1_000,
    )
    .await;
    let client = OpenAiCompatClient::new(url, "m", None, None, 50).unwrap();
    let err = client.chat(&request()).await.unwrap_err();
    assert!(matches!(err, MemexError::Llm(LlmError::Timeout { timeout_ms: 50 })));
    server.abort();
}
