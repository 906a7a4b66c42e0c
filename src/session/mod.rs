pub mod assistant;

use uuid::Uuid;

use crate::config::persona;
use crate::models::chat::{ ChatMessage, PayloadMessage, Role };

/// In-memory ordered conversation, owned by one session and discarded with
/// it. Insertion order is chronological order; messages are immutable once
/// appended.
pub struct ConversationStore {
    id: String,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ConversationStore {
    /// Every conversation starts with exactly one assistant greeting.
    pub fn new() -> Self {
        let mut store = Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            next_id: 1,
        };
        store.append(Role::Assistant, persona::GREETING.as_str());
        store
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push_user(&mut self, content: &str) {
        self.append(Role::User, content);
    }

    pub fn push_assistant(&mut self, content: &str) {
        self.append(Role::Assistant, content);
    }

    fn append(&mut self, role: Role, content: &str) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, role, content));
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the ephemeral request payload: the portfolio context as a `system`
/// message, the conversation so far stripped to role and content, and the
/// new user message last.
pub fn build_outbound_payload(
    context: &str,
    history: &[ChatMessage],
    user_text: &str
) -> Vec<PayloadMessage> {
    let mut payload = Vec::with_capacity(history.len() + 2);
    payload.push(PayloadMessage {
        role: Role::System,
        content: context.to_string(),
    });
    payload.extend(history.iter().map(PayloadMessage::from));
    payload.push(PayloadMessage {
        role: Role::User,
        content: user_text.to_string(),
    });
    payload
}
