pub mod constant;
pub mod error;
pub mod mongodb;

use async_trait::async_trait;
pub use error::DatabaseError;
use ::mongodb::IndexModel;

/// Outcome of a collection creation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    Created,
    AlreadyExists,
}

/// Trait defining the administrative operations the bootstrap needs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// database_name - name of the database the client is bound to
    fn database_name(&self) -> String;

    /// health_check - ping the database
    async fn health_check(&self) -> Result<(), DatabaseError>;

    /// create_collection - create a collection, treating an existing one as success
    async fn create_collection(&self, name: &str) -> Result<CollectionStatus, DatabaseError>;

    /// create_indexes - create indexes on a collection, returns the index names reported by the server
    async fn create_indexes(&self, collection: &str, indexes: Vec<IndexModel>) -> Result<Vec<String>, DatabaseError>;

    /// list_indexes - list every index on a collection, including `_id_`
    ///
    /// Fails with [`DatabaseError::CollectionNotFound`] when the collection does not exist.
    async fn list_indexes(&self, collection: &str) -> Result<Vec<IndexModel>, DatabaseError>;
}
