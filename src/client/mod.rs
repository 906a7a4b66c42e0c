//! Client side of the proxy wire protocol. The transport absorbs every
//! failure at this boundary: callers receive either a usable reply string or
//! `None`, never an error.

use async_trait::async_trait;
use log::error;
use reqwest::Client as HttpClient;
use serde::{ Deserialize, Serialize };
use std::error::Error as StdError;

use crate::models::chat::PayloadMessage;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/chat";

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Posts the full conversation payload and returns the assistant's reply
    /// text, or `None` when the round-trip failed or carried no reply.
    async fn send_message(&self, history: &[PayloadMessage]) -> Option<String>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [PayloadMessage],
}

#[derive(Deserialize)]
struct ChatReply {
    reply: Option<String>,
}

pub struct HttpChatTransport {
    http: HttpClient,
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_history(
        &self,
        history: &[PayloadMessage]
    ) -> Result<Option<String>, Box<dyn StdError + Send + Sync>> {
        let request = ChatRequest { messages: history };
        let resp = self.http.post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatReply>()
            .await?;

        Ok(resp.reply)
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send_message(&self, history: &[PayloadMessage]) -> Option<String> {
        match self.post_history(history).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Chat request to {} failed: {}", self.endpoint, e);
                None
            }
        }
    }
}
