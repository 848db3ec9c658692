use serde::{Deserialize, Serialize};
use chrono::{DateTime, SubsecRound, Utc};

/// Registered identity. Users are created outside this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self { username: username.into() }
    }
}

/// A stored chat message. `sent_at` is always assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub username: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a message stamped with the current time, truncated to the millisecond
    /// precision of a BSON datetime
    pub fn new(username: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(username, message, Utc::now().trunc_subsecs(3))
    }
    
    pub fn at(
        username: impl Into<String>,
        message: impl Into<String>,
        sent_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username: username.into(),
            message: message.into(),
            sent_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_new_message_is_stamped_now() {
        let before = Utc::now().trunc_subsecs(3);
        let msg = ChatMessage::new("alice", "hi");
        let after = Utc::now();
        
        assert_eq!(msg.username, "alice");
        assert_eq!(msg.message, "hi");
        assert!(msg.sent_at >= before && msg.sent_at <= after);
    }
    
    #[test]
    fn test_new_message_has_millisecond_precision() {
        for _ in 0..10 {
            let msg = ChatMessage::new("alice", "hi");
            assert_eq!(msg.sent_at.timestamp_subsec_nanos() % 1_000_000, 0);
        }
    }
    
    #[test]
    fn test_message_json_field_names() {
        let msg = ChatMessage::at("bob", "hello", DateTime::UNIX_EPOCH);
        let value = serde_json::to_value(&msg).unwrap();
        
        assert_eq!(value["username"], "bob");
        assert_eq!(value["message"], "hello");
        assert_eq!(value["sent_at"], "1970-01-01T00:00:00Z");
    }
}
