//! Service traits for tasks and property records

use crate::core::error::TaskboardResult;
use crate::core::property::Property;
use crate::entities::task::{NewTask, Task, TaskPatch, TaskStatus};
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing tasks
///
/// Implementations provide CRUD operations; handlers are agnostic to the
/// underlying storage mechanism.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Create a new task
    async fn create(&self, input: NewTask) -> TaskboardResult<Task>;

    /// Get a task by ID
    async fn get(&self, id: &Uuid) -> TaskboardResult<Option<Task>>;

    /// List tasks, newest first, optionally restricted to one status
    async fn list(&self, status: Option<TaskStatus>) -> TaskboardResult<Vec<Task>>;

    /// Apply a partial update
    ///
    /// Returns `EntityError::NotFound` when the id is unknown.
    async fn update(&self, id: &Uuid, patch: TaskPatch) -> TaskboardResult<Task>;

    /// Delete a task and return it
    ///
    /// Returns `EntityError::NotFound` when the id is unknown.
    async fn delete(&self, id: &Uuid) -> TaskboardResult<Task>;
}

/// Supplier of property records for the listing
///
/// The listing engine is the same whether records come from a fixed set or a
/// real store; only the source changes.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Load the full, materialized record set
    async fn load(&self) -> TaskboardResult<Vec<Property>>;
}
