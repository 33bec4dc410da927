use crate::core::client::database::constant::DEFAULT_ID_INDEX;
use crate::core::client::{DatabaseClient, DatabaseError};
use crate::error::{BootstrapError, BootstrapResult};
use crate::schema::{CollectionSchema, IndexSpec};
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;
use tracing::{info, instrument, warn};

/// Difference between the indexes of a collection and its declared schema
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaReport {
    pub collection: String,
    /// Declared indexes the collection lacks
    pub missing: Vec<IndexSpec>,
    /// Key documents of indexes present on the collection but not declared
    pub unexpected: Vec<Document>,
}

impl SchemaReport {
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }

    /// Turns an inconsistent report into [`BootstrapError::SchemaMismatch`]
    pub fn ensure_consistent(self) -> BootstrapResult<Self> {
        if self.is_consistent() {
            return Ok(self);
        }
        Err(BootstrapError::SchemaMismatch {
            collection: self.collection,
            missing: self.missing.iter().map(ToString::to_string).collect(),
            unexpected: self.unexpected.iter().map(ToString::to_string).collect(),
        })
    }
}

/// Compares the indexes of `schema.name` with `schema.indexes`.
///
/// The `_id_` index is ignored. An index on a declared field that is unique,
/// sparse or partial counts as unexpected, and the declared one as missing.
/// A collection that does not exist yet misses every declared index.
#[instrument(skip_all, fields(collection = %schema.name))]
pub async fn verify(db: &dyn DatabaseClient, schema: &CollectionSchema) -> BootstrapResult<SchemaReport> {
    let existing = match db.list_indexes(&schema.name).await {
        Ok(existing) => existing,
        Err(DatabaseError::CollectionNotFound(_)) => {
            warn!("Collection does not exist");
            Vec::new()
        }
        Err(e) => return Err(e.into()),
    };

    let mut present = Vec::new();
    let mut unexpected = Vec::new();
    for index in existing.into_iter().filter(|index| !is_default_id_index(index)) {
        match IndexSpec::from_keys(&index.keys) {
            Some(spec) if schema.indexes.contains(&spec) && is_plain(index.options.as_ref()) => present.push(spec),
            _ => unexpected.push(index.keys),
        }
    }
    let missing: Vec<IndexSpec> = schema.indexes.iter().filter(|spec| !present.contains(spec)).cloned().collect();

    let report = SchemaReport { collection: schema.name.clone(), missing, unexpected };
    if report.is_consistent() {
        info!(indexes = present.len(), "Collection matches its schema");
    } else {
        warn!(missing = ?report.missing, unexpected = ?report.unexpected, "Collection does not match its schema");
    }
    Ok(report)
}

fn is_default_id_index(index: &IndexModel) -> bool {
    let named_id = index.options.as_ref().and_then(|options| options.name.as_deref()) == Some(DEFAULT_ID_INDEX);
    named_id || index.keys == doc! { "_id": 1 }
}

fn is_plain(options: Option<&IndexOptions>) -> bool {
    match options {
        None => true,
        Some(options) => {
            options.unique != Some(true) && options.sparse != Some(true) && options.partial_filter_expression.is_none()
        }
    }
}
