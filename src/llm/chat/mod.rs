pub mod openai;

use async_trait::async_trait;
use std::error::Error as StdError;
use std::sync::Arc;

use self::openai::OpenAIChatClient;
use super::LlmConfig;
use crate::models::chat::PayloadMessage;

/// Outcome of one completion call. `content` is `None` when the provider
/// answered without a usable first choice; the proxy decides what to
/// substitute.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: Option<String>,
}

/// Single-shot completion seam between the proxy and the remote provider.
/// No retry, no streaming: one conversation in, at most one reply out.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(
        &self,
        messages: &[PayloadMessage]
    ) -> Result<CompletionResponse, Box<dyn StdError + Send + Sync>>;
}

pub fn new_client(
    config: &LlmConfig
) -> Result<Arc<dyn ChatClient>, Box<dyn StdError + Send + Sync>> {
    let client = OpenAIChatClient::from_config(config)?;
    Ok(Arc::new(client))
}
