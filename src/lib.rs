//! # Taskboard
//!
//! A small REST backend with two resources:
//!
//! - **Tasks**: create, read, update and delete tasks with a status and an
//!   optional deadline.
//! - **Properties**: a read-only listing of property records that can be
//!   filtered, searched, sorted and paginated. The whole view is encoded in
//!   the query string, so any listing can be bookmarked or shared.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use taskboard::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(AppConfig::from_yaml_file("taskboard.yaml")?)
//!         .with_task_service(InMemoryTaskService::new())
//!         .serve("127.0.0.1:3001")
//!         .await
//! }
//! ```
//!
//! The listing engine can also be used without HTTP:
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use taskboard::core::{codec, engine, property::mock_properties};
//!
//! let query = codec::decode("?status=active&sortBy=price&sortOrder=asc");
//! let page_size = NonZeroUsize::new(4).unwrap();
//! let result = engine::evaluate(&mock_properties(), &query, page_size);
//!
//! assert_eq!(result.total_count, 6);
//! assert_eq!(result.items[0].id, 9);
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        codec::{decode, encode},
        entity::Entity,
        error::{TaskboardError, TaskboardResult},
        property::{Property, PropertyStatus, PropertyType, mock_properties},
        query::{PaginationMeta, QueryState, SortKey, SortOrder},
        service::{PropertySource, TaskService},
        summary::{ActiveFilter, active_filters},
        view::{ListingSessions, ListingView},
    };
    pub use crate::core::engine::{Evaluation, evaluate};

    // === Entities ===
    pub use crate::entities::task::{NewTask, Task, TaskPatch, TaskStatus};

    // === Storage ===
    pub use crate::storage::{InMemoryTaskService, StaticPropertySource};

    // === Config ===
    pub use crate::config::{AppConfig, ListingConfig, ServerConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use uuid::Uuid;
}
