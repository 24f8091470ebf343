use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::api_client::{ApiClient, ApiError};

pub const GREETING: &str =
    "Hello! I can help you with job matching and CV advice. What would you like to know?";
pub const UNREACHABLE_REPLY: &str = "⚠️ Error: Could not reach chatbot server.";

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn ask(&self, message: &str) -> Result<String, ApiError>;
}

#[async_trait]
impl ChatBackend for ApiClient {
    async fn ask(&self, message: &str) -> Result<String, ApiError> {
        self.ask_chatbot(message).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub time: DateTime<Utc>,
}

/// One conversation with the assistant. The transcript always opens with [`GREETING`].
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                sender: Sender::Bot,
                text: GREETING.to_string(),
                time: Utc::now(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sends `text` and records both sides. Blank input is ignored and returns `None`.
    /// Backend failures become an error reply in the transcript rather than an `Err`.
    pub async fn send(&mut self, backend: &dyn ChatBackend, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.push(Sender::User, text.to_string());

        let reply = match backend.ask(text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Chatbot request failed: {e}");
                UNREACHABLE_REPLY.to_string()
            }
        };
        self.push(Sender::Bot, reply);
        self.messages.last()
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.messages.push(ChatMessage {
            sender,
            text,
            time: Utc::now(),
        });
    }
}
