use mongodb::{Client, Collection, bson::doc};

use crate::dbs::mongo::models::MongoUser;
use crate::error::Result;

#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<MongoUser>,
}

impl MongoUserRepository {
    pub fn new(client: &Client, db_name: &str) -> Self {
        let collection = client.database(db_name).collection("users");
        Self { collection }
    }
    
    /// Count users with exactly this username
    pub async fn count_by_username(&self, username: &str) -> Result<u64> {
        let filter = doc! { "username": username };
        Ok(self.collection.count_documents(filter).await?)
    }
}
