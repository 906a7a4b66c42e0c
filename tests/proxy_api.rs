//! Wire-protocol contract tests for the completion proxy, driven against the
//! router with a scripted provider client.

use async_trait::async_trait;
use axum::Router;
use axum::body::{ to_bytes, Body };
use axum::http::{ Request, StatusCode };
use serde_json::{ json, Value };
use std::error::Error as StdError;
use std::sync::atomic::{ AtomicUsize, Ordering };
use std::sync::{ Arc, Mutex };
use tower::ServiceExt;

use portfolio_agent::llm::chat::{ ChatClient, CompletionResponse };
use portfolio_agent::models::chat::{ PayloadMessage, Role };
use portfolio_agent::server::api::{ router, EMPTY_COMPLETION_REPLY };

enum Script {
    Reply(Option<&'static str>),
    Fail(&'static str),
}

struct ScriptedChatClient {
    script: Script,
    calls: AtomicUsize,
    seen: Mutex<Vec<PayloadMessage>>,
}

impl ScriptedChatClient {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ChatClient for ScriptedChatClient {
    async fn complete(
        &self,
        messages: &[PayloadMessage]
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.seen.lock().unwrap() = messages.to_vec();
        match &self.script {
            Script::Reply(content) => Ok(CompletionResponse {
                content: content.map(str::to_string),
            }),
            Script::Fail(detail) => Err((*detail).to_string().into()),
        }
    }
}

fn app(client: &Arc<ScriptedChatClient>) -> Router {
    router(client.clone())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_chat(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn valid_conversation_returns_provider_reply() {
    let client = ScriptedChatClient::new(Script::Reply(Some("Hello there")));
    let payload = json!({
        "messages": [
            { "role": "system", "content": "context" },
            { "role": "assistant", "content": "Hi! How can I help?" },
            { "role": "user", "content": "Who are you?" },
        ]
    });

    let (status, body) = send(app(&client), post_chat(&payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "reply": "Hello there" }));

    // The conversation is forwarded verbatim, order and roles intact.
    let seen = client.seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].role, Role::System);
    assert_eq!(seen[2].role, Role::User);
    assert_eq!(seen[2].content, "Who are you?");
}

#[tokio::test]
async fn non_array_messages_are_rejected_before_the_provider() {
    let client = ScriptedChatClient::new(Script::Reply(Some("unused")));

    let (status, body) = send(app(&client), post_chat(&json!({ "messages": "not-an-array" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Messages must be a non-empty array" }));
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_messages_field_is_rejected() {
    let client = ScriptedChatClient::new(Script::Reply(Some("unused")));

    let (status, body) = send(app(&client), post_chat(&json!({ "prompt": "hi" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Messages must be a non-empty array" }));
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_post_methods_are_not_allowed() {
    let client = ScriptedChatClient::new(Script::Reply(Some("unused")));
    let request = Request::builder()
        .method("GET")
        .uri("/api/chat")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app(&client), request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "error": "Method not allowed" }));
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn provider_failure_surfaces_as_generic_500() {
    let client = ScriptedChatClient::new(Script::Fail("rate limit exceeded for key sk-123"));
    let payload = json!({ "messages": [{ "role": "user", "content": "hi" }] });

    let (status, body) = send(app(&client), post_chat(&payload)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal Server Error" }));
    // The provider detail must not leak into the response.
    assert!(!body.to_string().contains("rate limit"));
}

#[tokio::test]
async fn empty_completion_substitutes_apology() {
    for script in [Script::Reply(None), Script::Reply(Some(""))] {
        let client = ScriptedChatClient::new(script);
        let payload = json!({ "messages": [{ "role": "user", "content": "hi" }] });

        let (status, body) = send(app(&client), post_chat(&payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "reply": EMPTY_COMPLETION_REPLY }));
    }
}

#[tokio::test]
async fn empty_messages_array_is_still_forwarded() {
    let client = ScriptedChatClient::new(Script::Reply(Some("Hello there")));

    let (status, _body) = send(app(&client), post_chat(&json!({ "messages": [] }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
}
