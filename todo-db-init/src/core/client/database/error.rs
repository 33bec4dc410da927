use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Mongo error: {0}")]
    MongoError(#[from] mongodb::error::Error),

    /// `uri` has its credentials redacted, `reason` is scrubbed of them
    #[error("Invalid connection URI {uri}: {reason}")]
    InvalidUri { uri: String, reason: String },

    #[error("Collection {0} does not exist")]
    CollectionNotFound(String),
}
