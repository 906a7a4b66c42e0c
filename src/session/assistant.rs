use log::debug;
use std::sync::Arc;
use std::sync::atomic::{ AtomicBool, Ordering };
use tokio::sync::Mutex;

use super::{ build_outbound_payload, ConversationStore };
use crate::client::ChatTransport;
use crate::config::persona;
use crate::fallback;
use crate::models::chat::ChatMessage;

/// Result of one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The conversation grew by one user and one assistant message.
    Replied,
    /// Empty or whitespace-only input; nothing happened.
    IgnoredEmpty,
    /// A round-trip is already in flight; nothing happened.
    Busy,
}

/// Ties the conversation store, the transport and the fallback responder
/// together. At most one submission is in flight per assistant; the
/// `sending` flag is the only concurrency control this session needs.
pub struct Assistant {
    transport: Arc<dyn ChatTransport>,
    store: Mutex<ConversationStore>,
    sending: AtomicBool,
}

impl Assistant {
    pub fn new(transport: Arc<dyn ChatTransport>, store: ConversationStore) -> Self {
        Self {
            transport,
            store: Mutex::new(store),
            sending: AtomicBool::new(false),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::Acquire)
    }

    /// Snapshot of the conversation for display collaborators.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.store.lock().await.messages().to_vec()
    }

    pub async fn session_id(&self) -> String {
        self.store.lock().await.id().to_string()
    }

    /// Runs one user submission through the pipeline. Exactly one assistant
    /// message is appended per accepted submission: the remote reply when
    /// the transport produced a non-empty one, the canned fallback answer
    /// otherwise. A failed round-trip is not retried.
    pub async fn handle_user_submit(&self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::IgnoredEmpty;
        }
        if self.sending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return SubmitOutcome::Busy;
        }

        let payload = {
            let mut store = self.store.lock().await;
            let payload = build_outbound_payload(
                persona::PORTFOLIO_CONTEXT.as_str(),
                store.messages(),
                trimmed
            );
            store.push_user(trimmed);
            debug!("Session {}: sending {} payload messages", store.id(), payload.len());
            payload
        };

        let reply = self.transport.send_message(&payload).await;
        let resolved = match reply {
            Some(text) if !text.is_empty() => text,
            _ => fallback::respond(trimmed),
        };

        {
            let mut store = self.store.lock().await;
            store.push_assistant(&resolved);
        }
        self.sending.store(false, Ordering::Release);

        SubmitOutcome::Replied
    }
}
