use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use bson::serde_helpers::chrono_datetime_as_bson_datetime;

use crate::models::ChatMessage;

/// Document in the `users` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoUser {
    pub username: String,
}

/// Document in the `messages` collection. `sent_at` is stored as a BSON datetime
/// (millisecond precision) so the server can sort on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoChatMessage {
    pub username: String,
    pub message: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub sent_at: DateTime<Utc>,
}

// Conversions between database-agnostic and MongoDB-specific models

impl From<ChatMessage> for MongoChatMessage {
    fn from(msg: ChatMessage) -> Self {
        Self {
            username: msg.username,
            message: msg.message,
            sent_at: msg.sent_at,
        }
    }
}

impl From<MongoChatMessage> for ChatMessage {
    fn from(msg: MongoChatMessage) -> Self {
        Self {
            username: msg.username,
            message: msg.message,
            sent_at: msg.sent_at,
        }
    }
}
