use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::profile::PeerProfile;

/// Persisted message record. Immutable once written; there is no edit or
/// delete path in this core.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// 40 lowercase hex chars from 20 random bytes.
    pub id: String,
    pub sender_id: i64,
    pub recipient_id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Transport shape of a message, formatted for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: String,
    pub body: String,
    /// Millisecond-precision epoch timestamp.
    pub sent_at: i64,
    pub own_message: bool,
}

impl MessageView {
    pub fn of(message: Message, viewer_id: i64) -> Self {
        Self {
            own_message: message.sender_id == viewer_id,
            sent_at: message.sent_at.timestamp_millis(),
            id: message.id,
            body: message.body,
        }
    }
}

/// Conversation between the viewer and one peer: the peer's public profile
/// plus the exchanged messages, newest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPayload {
    pub peer: PeerProfile,
    pub messages: Vec<MessageView>,
}
