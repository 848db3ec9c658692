pub mod models;
pub mod store;
pub mod memory;
pub mod error;
#[cfg(feature = "mongodb")]
pub mod dbs;
#[cfg(feature = "mongodb")]
pub mod builder;

pub use models::{ChatMessage, User};
pub use store::ChatStore;
pub use memory::InMemoryChatStore;
pub use error::PersistError;
#[cfg(feature = "mongodb")]
pub use dbs::mongo::MongoChatStore;
#[cfg(feature = "mongodb")]
pub use builder::ChatStoreBuilder;
