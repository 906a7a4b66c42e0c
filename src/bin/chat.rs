//! Terminal chat loop against a running proxy. Stands in for the website's
//! chat widget: prints the conversation, reads input, shows a busy note
//! while a round-trip is in flight.

use chrono::{ DateTime, Utc };
use clap::Parser;
use dotenv::dotenv;
use std::error::Error;
use std::io::{ self, BufRead, Write };
use std::sync::Arc;

use portfolio_agent::cli::Args;
use portfolio_agent::client::HttpChatTransport;
use portfolio_agent::config::persona;
use portfolio_agent::models::chat::{ ChatMessage, Role };
use portfolio_agent::session::ConversationStore;
use portfolio_agent::session::assistant::{ Assistant, SubmitOutcome };

fn print_message(msg: &ChatMessage) {
    let speaker = match msg.role {
        Role::Assistant => "assistant",
        Role::User => "you",
        Role::System => return,
    };
    let clock = DateTime::<Utc>::from_timestamp_millis(msg.timestamp)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_default();
    println!("[{}] {}: {}", clock, speaker, msg.content);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let transport = Arc::new(HttpChatTransport::new(args.chat_api_url.clone()));
    println!("Connected to {} (session starts fresh, Ctrl-D to quit)", transport.endpoint());

    let assistant = Assistant::new(transport, ConversationStore::new());

    for msg in assistant.messages().await.iter() {
        print_message(msg);
    }
    println!("Quick questions:");
    for question in persona::QUICK_QUESTIONS.iter() {
        println!("  - {}", question);
    }

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match assistant.handle_user_submit(&line).await {
            SubmitOutcome::Replied => {
                if let Some(reply) = assistant.messages().await.last() {
                    print_message(reply);
                }
            }
            SubmitOutcome::IgnoredEmpty => continue,
            SubmitOutcome::Busy => println!("(still waiting on the previous answer)"),
        }
    }

    Ok(())
}
