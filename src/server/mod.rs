pub mod api;

use std::error::Error;
use std::sync::Arc;

use crate::llm::chat::ChatClient;

pub struct Server {
    addr: String,
    chat_client: Arc<dyn ChatClient>,
}

impl Server {
    pub fn new(addr: String, chat_client: Arc<dyn ChatClient>) -> Self {
        Self { addr, chat_client }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        api::serve(&self.addr, self.chat_client.clone()).await
    }
}
