//! Core module containing the domain types and the listing engine
//!
//! The property listing is a pipeline of pure pieces:
//! [`codec`] turns a query string into a [`QueryState`], [`engine`] evaluates
//! it against a record slice, and [`summary`] describes the active criteria.
//! [`view`] keeps only the newest evaluation when a session's cycles overlap.

pub mod codec;
pub mod engine;
pub mod entity;
pub mod error;
pub mod property;
pub mod query;
pub mod service;
pub mod summary;
pub mod validation;
pub mod view;

pub use engine::{Evaluation, evaluate};
pub use entity::Entity;
pub use error::{TaskboardError, TaskboardResult};
pub use property::{Property, PropertyStatus, PropertyType};
pub use query::{PaginationMeta, QueryState, SortKey, SortOrder};
pub use service::{PropertySource, TaskService};
pub use summary::{ActiveFilter, FilterKind, active_filters};
pub use view::{ListingSessions, ListingView};
