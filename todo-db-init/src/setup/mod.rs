use crate::cli::{SetupCmd, VerifyCmd};
use crate::config::MongoConfig;
use crate::core::client::{CollectionStatus, DatabaseClient, MongoDbClient};
use crate::error::BootstrapResult;
use crate::schema::CollectionSchema;
use std::io::Write;
use tracing::{debug, info, instrument};

pub mod verify;

pub use verify::{verify, SchemaReport};

/// Line written to stdout once every step of the bootstrap succeeded
pub const COMPLETION_MESSAGE: &str = "MongoDB initialization completed successfully!";

/// What a bootstrap run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub database: String,
    pub collection: String,
    pub collection_status: CollectionStatus,
    pub index_names: Vec<String>,
}

/// Creates the collection described by `schema` and declares its indexes, then
/// writes [`COMPLETION_MESSAGE`] to `out`.
///
/// Steps run in order and stop at the first failure; nothing already applied is
/// rolled back. Running it again on a bootstrapped database changes nothing.
#[instrument(skip_all, fields(database = %db.database_name(), collection = %schema.name))]
pub async fn bootstrap<W: Write>(
    db: &dyn DatabaseClient,
    schema: &CollectionSchema,
    out: &mut W,
) -> BootstrapResult<BootstrapReport> {
    let collection_status = db.create_collection(&schema.name).await?;
    match collection_status {
        CollectionStatus::Created => info!("Collection created"),
        CollectionStatus::AlreadyExists => info!("Collection already present, keeping it"),
    }

    for index in &schema.indexes {
        debug!(keys = %index, "Declaring index");
    }
    let index_names = db.create_indexes(&schema.name, schema.index_models()).await?;
    info!(indexes = ?index_names, "Indexes declared");

    writeln!(out, "{}", COMPLETION_MESSAGE)?;
    out.flush()?;

    Ok(BootstrapReport {
        database: db.database_name(),
        collection: schema.name.clone(),
        collection_status,
        index_names,
    })
}

/// Connects with the command's MongoDB parameters and bootstraps the comments collection
pub async fn setup(setup_cmd: &SetupCmd) -> BootstrapResult<BootstrapReport> {
    let config = MongoConfig::try_from(setup_cmd.mongodb_args.clone())?;
    debug!("Mongo Params: {:?}", config);

    let client = MongoDbClient::new(&config).await?;
    let schema = CollectionSchema::comments().with_name(&config.collection_name);
    bootstrap(&client, &schema, &mut std::io::stdout()).await
}

/// Connects with the command's MongoDB parameters and checks the comments collection indexes
pub async fn check(verify_cmd: &VerifyCmd) -> BootstrapResult<SchemaReport> {
    let config = MongoConfig::try_from(verify_cmd.mongodb_args.clone())?;
    debug!("Mongo Params: {:?}", config);

    let client = MongoDbClient::new(&config).await?;
    let schema = CollectionSchema::comments().with_name(&config.collection_name);
    verify(&client, &schema).await?.ensure_consistent()
}
