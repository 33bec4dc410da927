use super::constant::{NAMESPACE_EXISTS_CODE, NAMESPACE_NOT_FOUND_CODE};
use super::{CollectionStatus, DatabaseClient, DatabaseError};
use crate::config::{redact_connection_url, redact_credentials, MongoConfig};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

const APP_NAME: &str = "todo-db-init";

/// MongoDB client bound to a single database
pub struct MongoDbClient {
    client: Client,
    database: Arc<Database>,
}

impl MongoDbClient {
    /// Connects to the server described by `config` and pings it before returning,
    /// so an unreachable server fails here rather than on the first write.
    pub async fn new(config: &MongoConfig) -> Result<Self, DatabaseError> {
        let mut options = ClientOptions::parse(&config.connection_url)
            .await
            .map_err(|e| DatabaseError::InvalidUri {
                uri: redact_connection_url(&config.connection_url),
                reason: redact_credentials(&e.to_string(), &config.connection_url),
            })?;
        options.app_name = Some(APP_NAME.to_string());
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        options.server_selection_timeout = Some(Duration::from_secs(config.server_selection_timeout_secs));

        let client = Client::with_options(options)?;
        let database = Arc::new(client.database(&config.database_name));
        let this = Self { client, database };
        this.health_check().await?;

        info!(database = %config.database_name, "Connected to MongoDB");
        Ok(this)
    }

    /// Get a typed collection
    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Mongodb client uses Arc internally, reducing the cost of clone.
    ///
    /// Not used by the bootstrap itself; the live integration tests and other
    /// tooling reach the underlying driver through it, e.g. to drop a database.
    pub fn client(&self) -> Client {
        self.client.clone()
    }
}

#[async_trait]
impl DatabaseClient for MongoDbClient {
    fn database_name(&self) -> String {
        self.database.name().to_string()
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }

    async fn create_collection(&self, name: &str) -> Result<CollectionStatus, DatabaseError> {
        match self.database.create_collection(name, None).await {
            Ok(()) => Ok(CollectionStatus::Created),
            Err(e) if has_code(&e, NAMESPACE_EXISTS_CODE) => {
                debug!(collection = %name, "Collection already exists");
                Ok(CollectionStatus::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn create_indexes(&self, collection: &str, indexes: Vec<IndexModel>) -> Result<Vec<String>, DatabaseError> {
        let result = self.collection::<Document>(collection).create_indexes(indexes, None).await?;
        Ok(result.index_names)
    }

    async fn list_indexes(&self, collection: &str) -> Result<Vec<IndexModel>, DatabaseError> {
        let cursor = match self.collection::<Document>(collection).list_indexes(None).await {
            Ok(cursor) => cursor,
            Err(e) if has_code(&e, NAMESPACE_NOT_FOUND_CODE) => {
                return Err(DatabaseError::CollectionNotFound(collection.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(cursor.try_collect().await?)
    }
}

fn has_code(err: &mongodb::error::Error, code: i32) -> bool {
    matches!(*err.kind, ErrorKind::Command(ref command) if command.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_invalid_uri_error_hides_password() {
        let config = MongoConfig::new("mongodb://admin:s3cretPass@db:notaport");
        let Err(err) = MongoDbClient::new(&config).await else {
            panic!("a URI with a non numeric port must be rejected");
        };

        assert_matches!(&err, DatabaseError::InvalidUri { uri, .. } if uri == "mongodb://***@db:notaport");
        let shown = BootstrapError::from(err).to_string();
        assert!(!shown.contains("s3cretPass"), "{shown}");
    }
}
