use chrono::{DateTime, Utc};

/// An inbound chat message as handed over by a gateway adapter.
///
/// The dispatcher only reads `text`; `chat_id` is the opaque reference the
/// adapter needs to route the reply back. Messages are created per update
/// and dropped once the reply is sent.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub id: String,
    pub chat_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}
