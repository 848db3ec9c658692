use mongodb::{Client, bson::doc};
use async_trait::async_trait;

use crate::store::ChatStore;
use crate::models::ChatMessage;
use crate::dbs::mongo::models::MongoChatMessage;
use crate::dbs::mongo::repositories::{MongoMessageRepository, MongoUserRepository};
use crate::error::{Result, PersistError};

pub struct MongoChatStore {
    client: Client,
    database: String,
    user_repo: MongoUserRepository,
    message_repo: MongoMessageRepository,
}

impl MongoChatStore {
    /// Connect to MongoDB and verify the server answers a ping
    pub async fn connect(mongodb_uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongodb_uri)
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;
        
        let store = Self {
            user_repo: MongoUserRepository::new(&client, database),
            message_repo: MongoMessageRepository::new(&client, database),
            database: database.to_string(),
            client,
        };
        
        store.ping().await?;
        tracing::debug!(database = %store.database, "MongoDB ping succeeded");
        
        Ok(store)
    }
}

#[async_trait]
impl ChatStore for MongoChatStore {
    async fn user_exists(&self, username: &str) -> Result<bool> {
        let count = self.user_repo.count_by_username(username).await?;
        Ok(count > 0)
    }
    
    async fn insert_message(&self, message: ChatMessage) -> Result<()> {
        let mongo_message: MongoChatMessage = message.into();
        self.message_repo.save_message(mongo_message).await
    }
    
    async fn list_messages(&self) -> Result<Vec<ChatMessage>> {
        let mongo_messages = self.message_repo.get_messages().await?;
        let messages = mongo_messages.into_iter().map(|m| m.into()).collect();
        Ok(messages)
    }
    
    async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;
        Ok(())
    }
    
    async fn close(&self) {
        tracing::info!("Closing MongoDB connection");
        self.client.clone().shutdown().await;
    }
}
