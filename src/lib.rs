pub mod cli;
pub mod client;
pub mod config;
pub mod fallback;
pub mod llm;
pub mod models;
pub mod server;
pub mod session;

use cli::Args;
use llm::LlmConfig;
use llm::chat::{ new_client, openai };
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Server Address: {}", args.server_addr);
    info!("Chat Model: {}", args.chat_model.as_deref().unwrap_or(openai::DEFAULT_MODEL));
    info!("Provider Base URL: {}", args.chat_base_url.as_deref().unwrap_or(openai::DEFAULT_BASE_URL));
    info!("Provider API Key Loaded: {}", if args.openai_api_key.is_empty() { "no" } else { "yes" });
    info!("-------------------------");

    let chat_config = LlmConfig {
        api_key: Some(args.openai_api_key.clone()).filter(|k| !k.is_empty()),
        completion_model: args.chat_model.clone(),
        base_url: args.chat_base_url.clone(),
    };
    let chat_client = new_client(&chat_config)?;

    let server = Server::new(args.server_addr.clone(), chat_client);
    server.run().await
}
