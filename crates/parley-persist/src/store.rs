use async_trait::async_trait;
use crate::models::ChatMessage;
use crate::error::Result;

/// Trait for chat persistence operations
/// 
/// Implementations must be safe to share across request handlers.
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Whether at least one user record has exactly this username
    async fn user_exists(&self, username: &str) -> Result<bool>;
    
    /// Append a message. No deduplication is performed.
    async fn insert_message(&self, message: ChatMessage) -> Result<()>;
    
    /// Every stored message, ascending by `sent_at`
    async fn list_messages(&self) -> Result<Vec<ChatMessage>>;
    
    /// Check that the backend is reachable
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
    
    /// Release backend resources. Called once at shutdown.
    async fn close(&self) {}
}
