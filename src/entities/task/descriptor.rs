//! Entity descriptor for Task

use super::handlers::{TaskAppState, create_task, delete_task, get_task, list_tasks, update_task};
use super::model::Task;
use crate::core::entity::Entity;
use crate::core::service::TaskService;
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Task entity
pub struct TaskDescriptor {
    pub service: Arc<dyn TaskService>,
}

impl TaskDescriptor {
    pub fn new(service: Arc<dyn TaskService>) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for TaskDescriptor {
    fn entity_type(&self) -> &str {
        Task::resource_name_singular()
    }

    fn plural(&self) -> &str {
        Task::resource_name()
    }

    fn build_routes(&self) -> Router {
        let state = TaskAppState {
            service: self.service.clone(),
        };

        Router::new()
            .route("/tasks", get(list_tasks).post(create_task))
            .route(
                "/tasks/{id}",
                get(get_task).patch(update_task).delete(delete_task),
            )
            .with_state(state)
    }
}
