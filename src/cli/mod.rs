use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Completion Provider Args ---
    /// API key for the OpenAI-compatible completion provider. Leaving it
    /// empty is allowed; provider calls will fail and surface as 500.
    #[arg(long, env = "OPENAI_API_KEY", default_value = "")]
    pub openai_api_key: String,

    /// Model name for chat completion (e.g., gpt-3.5-turbo, gpt-4o-mini)
    #[arg(long, env = "OPENAI_MODEL")] // No default, rely on adapter default if None
    pub chat_model: Option<String>,

    /// Base URL for the completion provider API (e.g., https://api.openai.com)
    #[arg(long, env = "CHAT_BASE_URL")]
    pub chat_base_url: Option<String>,

    // --- Server Args ---
    /// Host address and port for the proxy server to listen on.
    #[arg(long, env = "SERVER_ADDR", default_value = "127.0.0.1:3000")]
    pub server_addr: String,

    // --- Client Args ---
    /// Endpoint URL the chat client posts conversations to.
    #[arg(long, env = "CHAT_API_URL", default_value = "http://localhost:3000/api/chat")]
    pub chat_api_url: String,
}
