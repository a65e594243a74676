//! Scripted chat client.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use memex_core::errors::{LlmError, MemexResult};
use memex_core::models::ChatRequest;
use memex_core::traits::IChatClient;

type Responder = Box<dyn Fn(&ChatRequest) -> String + Send + Sync>;

enum Scripted {
    Reply(String),
    Fail(LlmError),
}

/// A chat client that answers from a script.
///
/// Queued replies are used first, in order; after that the responder
/// answers, and without one the call fails with `MissingContent`. Every
/// request is recorded, as is the peak number of concurrent calls.
pub struct ScriptedChatClient {
    available: bool,
    queue: Mutex<VecDeque<Scripted>>,
    responder: Option<Responder>,
    delay: Option<Duration>,
    requests: Mutex<Vec<ChatRequest>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl Default for ScriptedChatClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedChatClient {
    pub fn new() -> Self {
        Self {
            available: true,
            queue: Mutex::new(VecDeque::new()),
            responder: None,
            delay: None,
            requests: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    /// Always answer `reply`.
    pub fn always(reply: impl Into<String>) -> Self {
        let reply = reply.into();
        Self::new().with_responder(move |_| reply.clone())
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.push(Scripted::Reply(reply.into()));
        self
    }

    pub fn with_error(self, error: LlmError) -> Self {
        self.push(Scripted::Fail(error));
        self
    }

    pub fn with_responder(
        mut self,
        responder: impl Fn(&ChatRequest) -> String + Send + Sync + 'static,
    ) -> Self {
        self.responder = Some(Box::new(responder));
        self
    }

    /// Sleep this long inside every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn push(&self, item: Scripted) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(item);
        }
    }

    fn next_answer(&self, request: &ChatRequest) -> MemexResult<String> {
        let queued = self.queue.lock().ok().and_then(|mut q| q.pop_front());
        match queued {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Fail(error)) => Err(error.into()),
            None => match &self.responder {
                Some(responder) => Ok(responder(request)),
                None => Err(LlmError::MissingContent.into()),
            },
        }
    }
}

#[async_trait]
impl IChatClient for ScriptedChatClient {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn chat(&self, request: &ChatRequest) -> MemexResult<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let answer = self.next_answer(request);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        answer
    }
}

/// Numbered documents (`[n] ...`) in the user message of a scoring prompt.
pub fn numbered_documents(request: &ChatRequest) -> Vec<(usize, String)> {
    request
        .messages
        .last()
        .map(|m| {
            m.content
                .lines()
                .filter_map(|line| {
                    let rest = line.strip_prefix('[')?;
                    let (n, text) = rest.split_once("] ")?;
                    Some((n.parse().ok()?, text.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}
