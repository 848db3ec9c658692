use mongodb::{Client, Collection, bson::doc, error::ErrorKind};
use futures::TryStreamExt;

use crate::dbs::mongo::models::MongoChatMessage;
use crate::error::{PersistError, Result};

#[derive(Clone)]
pub struct MongoMessageRepository {
    collection: Collection<MongoChatMessage>,
}

impl MongoMessageRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("messages");
        Self { collection }
    }
    
    /// Save a single message
    pub async fn save_message(&self, message: MongoChatMessage) -> Result<()> {
        self.collection.insert_one(&message).await?;
        Ok(())
    }
    
    /// Get all messages, oldest first
    pub async fn get_messages(&self) -> Result<Vec<MongoChatMessage>> {
        let messages = self.collection
            .find(doc! {})
            .sort(doc! { "sent_at": 1 })
            .await?
            .try_collect()
            .await
            .map_err(classify_cursor_error)?;
        Ok(messages)
    }
}

fn classify_cursor_error(e: mongodb::error::Error) -> PersistError {
    if matches!(e.kind.as_ref(), ErrorKind::BsonDeserialization(_)) {
        PersistError::Decode(e.to_string())
    } else {
        PersistError::Database(e)
    }
}
