pub mod chat;

/// Connection settings for the completion provider, assembled from CLI/env
/// configuration before the client is built.
#[derive(Clone, Debug)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub completion_model: Option<String>,
    pub base_url: Option<String>,
}
