//! Collection and index descriptors.
//!
//! The `comments` collection is queried by task (top level comments ordered by
//! creation time) and by parent (replies), and filtered by author. It carries
//! one ascending single-field index per access path:
//! - `{ "taskId": 1 }`
//! - `{ "parentId": 1 }`
//! - `{ "createdAt": 1 }`
//! - `{ "authorId": 1 }`

use crate::core::client::database::constant::COMMENTS_COLLECTION;
use crate::types::comment::fields;
use mongodb::bson::{Bson, Document};
use mongodb::IndexModel;
use std::fmt;

/// Sort direction of an index key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexDirection {
    Ascending,
    Descending,
}

impl IndexDirection {
    pub fn as_i32(self) -> i32 {
        match self {
            IndexDirection::Ascending => 1,
            IndexDirection::Descending => -1,
        }
    }

    /// The server may report key directions as any numeric BSON type
    fn from_bson(value: &Bson) -> Option<Self> {
        let direction = match value {
            Bson::Int32(v) => *v as i64,
            Bson::Int64(v) => *v,
            Bson::Double(v) if v.fract() == 0.0 => *v as i64,
            _ => return None,
        };
        match direction {
            1 => Some(IndexDirection::Ascending),
            -1 => Some(IndexDirection::Descending),
            _ => None,
        }
    }
}

/// A single-field index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub field: String,
    pub direction: IndexDirection,
}

impl IndexSpec {
    pub fn ascending(field: &str) -> Self {
        Self { field: field.to_string(), direction: IndexDirection::Ascending }
    }

    pub fn keys(&self) -> Document {
        let mut keys = Document::new();
        keys.insert(self.field.clone(), self.direction.as_i32());
        keys
    }

    /// Name MongoDB derives for the index when none is given, e.g. `taskId_1`
    pub fn default_name(&self) -> String {
        format!("{}_{}", self.field, self.direction.as_i32())
    }

    pub fn to_index_model(&self) -> IndexModel {
        IndexModel::builder().keys(self.keys()).build()
    }

    /// Reads back a key document produced by `keys`. Compound, text, hashed and
    /// other special keys yield `None`.
    pub fn from_keys(keys: &Document) -> Option<Self> {
        if keys.len() != 1 {
            return None;
        }
        let (field, value) = keys.iter().next()?;
        let direction = IndexDirection::from_bson(value)?;
        Some(Self { field: field.clone(), direction })
    }
}

impl fmt::Display for IndexSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keys())
    }
}

/// A collection and the indexes declared on it, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSchema {
    pub name: String,
    pub indexes: Vec<IndexSpec>,
}

impl CollectionSchema {
    /// Schema of the task comments collection
    pub fn comments() -> Self {
        Self {
            name: COMMENTS_COLLECTION.to_string(),
            indexes: [fields::TASK_ID, fields::PARENT_ID, fields::CREATED_AT, fields::AUTHOR_ID]
                .into_iter()
                .map(IndexSpec::ascending)
                .collect(),
        }
    }

    /// Same indexes under another collection name
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn index_models(&self) -> Vec<IndexModel> {
        self.indexes.iter().map(IndexSpec::to_index_model).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use rstest::rstest;

    #[test]
    fn test_comments_schema_declares_four_ascending_indexes_in_order() {
        let schema = CollectionSchema::comments();
        assert_eq!(schema.name, "comments");

        let fields: Vec<&str> = schema.indexes.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["taskId", "parentId", "createdAt", "authorId"]);
        assert!(schema.indexes.iter().all(|i| i.direction == IndexDirection::Ascending));
    }

    #[test]
    fn test_index_models_are_single_field_without_options() {
        let models = CollectionSchema::comments().index_models();
        assert_eq!(models.len(), 4);

        for model in &models {
            assert_eq!(model.keys.len(), 1);
            assert_eq!(model.keys.values().next(), Some(&Bson::Int32(1)));
            assert!(model.options.is_none());
        }
        assert_eq!(models[0].keys, doc! { "taskId": 1 });
        assert_eq!(models[3].keys, doc! { "authorId": 1 });
    }

    #[test]
    fn test_with_name_keeps_indexes() {
        let schema = CollectionSchema::comments().with_name("comments_archive");
        assert_eq!(schema.name, "comments_archive");
        assert_eq!(schema.indexes, CollectionSchema::comments().indexes);
    }

    #[rstest]
    #[case(IndexSpec::ascending("taskId"), "taskId_1")]
    #[case(IndexSpec { field: "createdAt".to_string(), direction: IndexDirection::Descending }, "createdAt_-1")]
    fn test_default_name(#[case] spec: IndexSpec, #[case] expected: &str) {
        assert_eq!(spec.default_name(), expected);
    }

    #[rstest]
    #[case(doc! { "taskId": 1 }, Some(IndexSpec::ascending("taskId")))]
    #[case(doc! { "taskId": 1_i64 }, Some(IndexSpec::ascending("taskId")))]
    #[case(doc! { "taskId": 1.0 }, Some(IndexSpec::ascending("taskId")))]
    #[case(
        doc! { "createdAt": -1 },
        Some(IndexSpec { field: "createdAt".to_string(), direction: IndexDirection::Descending })
    )]
    #[case(doc! { "taskId": 1, "createdAt": 1 }, None)]
    #[case(doc! { "content": "text" }, None)]
    #[case(doc! { "taskId": 2 }, None)]
    #[case(doc! {}, None)]
    fn test_from_keys(#[case] keys: Document, #[case] expected: Option<IndexSpec>) {
        assert_eq!(IndexSpec::from_keys(&keys), expected);
    }
}
