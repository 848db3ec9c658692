pub mod message;
pub mod user;

pub use message::MongoMessageRepository;
pub use user::MongoUserRepository;
