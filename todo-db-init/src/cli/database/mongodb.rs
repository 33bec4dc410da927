use crate::config::redact_connection_url;
use clap::Args;
use std::fmt;

/// Parameters used to config MongoDB.
#[derive(Clone, Args)]
pub struct MongoDBCliArgs {
    /// The connection string to the MongoDB server.
    #[arg(env = "TODO_DB_MONGODB_CONNECTION_URL", long, default_value = "mongodb://localhost:27017")]
    pub mongodb_connection_url: String,

    /// The name of the database.
    #[arg(env = "TODO_DB_DATABASE_NAME", long, default_value = "todo_db")]
    pub mongodb_database_name: String,

    /// The name of the comments collection.
    #[arg(env = "TODO_DB_COLLECTION_NAME", long, default_value = "comments")]
    pub mongodb_collection_name: String,

    /// Seconds to wait for a TCP connection to the server.
    #[arg(env = "TODO_DB_MONGODB_CONNECT_TIMEOUT_SECS", long, default_value_t = 10)]
    pub mongodb_connect_timeout_secs: u64,

    /// Seconds to wait for a suitable server to become available.
    #[arg(env = "TODO_DB_MONGODB_SERVER_SELECTION_TIMEOUT_SECS", long, default_value_t = 10)]
    pub mongodb_server_selection_timeout_secs: u64,
}

impl fmt::Debug for MongoDBCliArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongoDBCliArgs")
            .field("mongodb_connection_url", &redact_connection_url(&self.mongodb_connection_url))
            .field("mongodb_database_name", &self.mongodb_database_name)
            .field("mongodb_collection_name", &self.mongodb_collection_name)
            .field("mongodb_connect_timeout_secs", &self.mongodb_connect_timeout_secs)
            .field("mongodb_server_selection_timeout_secs", &self.mongodb_server_selection_timeout_secs)
            .finish()
    }
}
