use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::post,
    Router,
    extract::State,
    http::StatusCode,
    Json,
};
use log::{ info, error };
use serde_json::{ json, Value };
use tower_http::cors::{ Any, CorsLayer };

use crate::llm::chat::ChatClient;
use crate::models::chat::PayloadMessage;

/// Substituted when the provider answers without a usable first choice.
pub const EMPTY_COMPLETION_REPLY: &str = "I'm sorry, I couldn't generate a response.";

#[derive(Clone)]
struct AppState {
    chat_client: Arc<dyn ChatClient>,
}

pub fn router(chat_client: Arc<dyn ChatClient>) -> Router {
    // The production caller is a browser page, so the proxy stays
    // CORS-permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(chat_handler).fallback(method_not_allowed))
        .layer(cors)
        .with_state(AppState { chat_client })
}

pub async fn serve(
    addr: &str,
    chat_client: Arc<dyn ChatClient>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = addr.parse::<SocketAddr>()?;
    let app = router(chat_client);

    info!("Starting HTTP API server on: http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await
        .map_err(|e| format!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e))?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let messages = match parse_messages(&body) {
        Some(messages) => messages,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Messages must be a non-empty array" })),
            );
        }
    };

    info!("POST /api/chat: forwarding {} message(s)", messages.len());

    match state.chat_client.complete(&messages).await {
        Ok(completion) => {
            let reply = match completion.content {
                Some(text) if !text.is_empty() => text,
                _ => EMPTY_COMPLETION_REPLY.to_string(),
            };
            (StatusCode::OK, Json(json!({ "reply": reply })))
        }
        Err(e) => {
            // Provider detail stays server-side; the client only ever sees
            // the generic payload.
            error!("Chat completion failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Internal Server Error" })),
            )
        }
    }
}

/// The `messages` field must be an array of role/content pairs. An empty
/// array is forwarded as-is; the provider is the one to complain about it.
fn parse_messages(body: &Value) -> Option<Vec<PayloadMessage>> {
    let raw = body.get("messages")?.as_array()?;
    serde_json::from_value(Value::Array(raw.clone())).ok()
}

async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}
