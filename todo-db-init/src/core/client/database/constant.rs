/// Database holding the ToDo service documents
pub const TODO_DATABASE: &str = "todo_db";

/// Collection name for task comments
///
/// Each document is a single comment on a task. Replies point at their parent
/// comment through `parentId`; top level comments leave it unset.
pub const COMMENTS_COLLECTION: &str = "comments";

/// Name of the index MongoDB creates on `_id` for every collection
pub const DEFAULT_ID_INDEX: &str = "_id_";

/// Server error code returned by `create` when the collection already exists
pub const NAMESPACE_EXISTS_CODE: i32 = 48;

/// Server error code returned by `listIndexes` when the collection does not exist
pub const NAMESPACE_NOT_FOUND_CODE: i32 = 26;
