//! Bootstrap of the ToDo service MongoDB schema.
//!
//! Creates the `comments` collection in `todo_db` and declares its single-field
//! ascending indexes on `taskId`, `parentId`, `createdAt` and `authorId`. Every
//! step is safe to repeat: an existing collection and identical existing indexes
//! are left as they are.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod schema;
pub mod setup;
pub mod types;
pub mod utils;

// Re-export commonly used item
pub use error::{BootstrapError, BootstrapResult};
