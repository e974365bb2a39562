//! Entity trait defining the common shape of persisted records

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for all persisted entities.
///
/// All entities have:
/// - id: Unique identifier
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "tasks")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "task"), used in error messages
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Refresh `updated_at` after a modification
    fn touch(&mut self);
}
