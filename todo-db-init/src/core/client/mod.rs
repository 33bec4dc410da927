pub mod database;

pub use database::mongodb::MongoDbClient;
pub use database::{CollectionStatus, DatabaseClient, DatabaseError};
