use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::{ChatMessage, User};
use crate::store::ChatStore;

/// Process-local store backed by a user set and a message log
#[derive(Debug, Default)]
pub struct InMemoryChatStore {
    users: RwLock<HashSet<String>>,
    messages: RwLock<Vec<ChatMessage>>,
}

impl InMemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn with_users<I>(users: I) -> Self
    where
        I: IntoIterator<Item = User>,
    {
        Self {
            users: RwLock::new(users.into_iter().map(|u| u.username).collect()),
            messages: RwLock::new(Vec::new()),
        }
    }
    
    pub async fn add_user(&self, user: User) {
        self.users.write().await.insert(user.username);
    }
    
    pub async fn message_count(&self) -> usize {
        self.messages.read().await.len()
    }
}

#[async_trait]
impl ChatStore for InMemoryChatStore {
    async fn user_exists(&self, username: &str) -> Result<bool> {
        Ok(self.users.read().await.contains(username))
    }
    
    async fn insert_message(&self, message: ChatMessage) -> Result<()> {
        self.messages.write().await.push(message);
        Ok(())
    }
    
    async fn list_messages(&self) -> Result<Vec<ChatMessage>> {
        let mut messages = self.messages.read().await.clone();
        // Stable, so equal timestamps keep insertion order
        messages.sort_by_key(|m| m.sent_at);
        Ok(messages)
    }
}
