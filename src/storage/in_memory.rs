//! In-memory implementation of TaskService for testing and development

use crate::core::entity::Entity;
use crate::core::error::{EntityError, StorageError, TaskboardResult};
use crate::core::service::TaskService;
use crate::entities::task::{NewTask, Task, TaskPatch, TaskStatus};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// In-memory task service implementation
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryTaskService {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskService {
    /// Create a new in-memory task service
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn read(&self) -> TaskboardResult<RwLockReadGuard<'_, HashMap<Uuid, Task>>> {
        self.tasks.read().map_err(|e| {
            StorageError::LockPoisoned {
                message: format!("Failed to acquire read lock: {}", e),
            }
            .into()
        })
    }

    fn write(&self) -> TaskboardResult<RwLockWriteGuard<'_, HashMap<Uuid, Task>>> {
        self.tasks.write().map_err(|e| {
            StorageError::LockPoisoned {
                message: format!("Failed to acquire write lock: {}", e),
            }
            .into()
        })
    }
}

impl Default for InMemoryTaskService {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &Uuid) -> EntityError {
    EntityError::NotFound {
        entity_type: Task::resource_name_singular().to_string(),
        id: *id,
    }
}

#[async_trait]
impl TaskService for InMemoryTaskService {
    async fn create(&self, input: NewTask) -> TaskboardResult<Task> {
        let task = Task::from_new(input);
        let mut tasks = self.write()?;

        if tasks.contains_key(&task.id) {
            return Err(EntityError::AlreadyExists {
                entity_type: Task::resource_name_singular().to_string(),
                id: task.id,
            }
            .into());
        }

        tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn get(&self, id: &Uuid) -> TaskboardResult<Option<Task>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn list(&self, status: Option<TaskStatus>) -> TaskboardResult<Vec<Task>> {
        let tasks = self.read()?;

        let mut result: Vec<Task> = tasks
            .values()
            .filter(|task| status.is_none_or(|s| task.status == s))
            .cloned()
            .collect();

        // Newest first; id breaks ties so the order is deterministic
        result.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(result)
    }

    async fn update(&self, id: &Uuid, patch: TaskPatch) -> TaskboardResult<Task> {
        let mut tasks = self.write()?;

        let task = tasks.get_mut(id).ok_or_else(|| not_found(id))?;
        task.apply(patch);

        Ok(task.clone())
    }

    async fn delete(&self, id: &Uuid) -> TaskboardResult<Task> {
        let mut tasks = self.write()?;

        tasks.remove(id).ok_or_else(|| not_found(id).into())
    }
}
