use crate::MongoChatStore;
use crate::error::{Result, PersistError};

pub const DEFAULT_DATABASE: &str = "chatdb";

pub struct ChatStoreBuilder {
    mongodb_uri: Option<String>,
    database: String,
}

impl ChatStoreBuilder {
    pub fn new() -> Self {
        Self {
            mongodb_uri: None,
            database: DEFAULT_DATABASE.to_string(),
        }
    }
    
    pub fn mongodb_uri(mut self, uri: impl Into<String>) -> Self {
        self.mongodb_uri = Some(uri.into());
        self
    }
    
    pub fn database(mut self, db: impl Into<String>) -> Self {
        self.database = db.into();
        self
    }
    
    pub async fn build(self) -> Result<MongoChatStore> {
        let mongodb_uri = self.mongodb_uri
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| PersistError::Internal("mongodb_uri is required".to_string()))?;
        
        MongoChatStore::connect(&mongodb_uri, &self.database).await
    }
}

impl Default for ChatStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
