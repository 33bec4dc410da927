use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// Stored field names of a [`Comment`], as they appear in the collection
pub mod fields {
    pub const TASK_ID: &str = "taskId";
    pub const PARENT_ID: &str = "parentId";
    pub const CREATED_AT: &str = "createdAt";
    pub const AUTHOR_ID: &str = "authorId";
}

/// A comment left on a task.
///
/// Top level comments have no `parent_id`; replies carry the hex id of the
/// comment they answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub task_id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub author_role: String,
    pub content: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub replies_count: i32,
}

impl Comment {
    pub fn new(task_id: i32, author_id: i32, author_name: &str, author_role: &str, content: &str) -> Self {
        // BSON datetimes only keep milliseconds
        let now = Utc::now().round_subsecs(3);
        Self {
            id: None,
            task_id,
            author_id,
            author_name: author_name.to_string(),
            author_role: author_role.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
            parent_id: None,
            replies_count: 0,
        }
    }

    /// Turns the comment into a reply to `parent`
    pub fn reply_to(mut self, parent: ObjectId) -> Self {
        self.parent_id = Some(parent.to_hex());
        self
    }
}
