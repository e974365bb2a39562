//! Server host holding the application state
//!
//! The host is the single owner of configuration, services and the
//! per-session listing views. Exposures read from it to build their routers.

use crate::config::AppConfig;
use crate::core::service::{PropertySource, TaskService};
use crate::core::view::ListingSessions;
use crate::entities::property::PropertyAppState;
use crate::entities::{PropertyDescriptor, TaskDescriptor};
use crate::server::entity_registry::EntityRegistry;
use std::sync::Arc;

/// Host context containing all application state
pub struct ServerHost {
    /// Validated application configuration
    pub config: Arc<AppConfig>,

    /// Task persistence
    pub task_service: Arc<dyn TaskService>,

    /// Property records served by the listing
    pub property_source: Arc<dyn PropertySource>,

    /// Last committed listing evaluation of each client session
    pub sessions: Arc<ListingSessions>,

    /// Entity registry for entity routes
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    /// Build the host from builder components
    ///
    /// Registers the task and property descriptors against the given services.
    pub fn from_builder_components(
        config: AppConfig,
        task_service: Arc<dyn TaskService>,
        property_source: Arc<dyn PropertySource>,
    ) -> Self {
        let config = Arc::new(config);
        let sessions = Arc::new(ListingSessions::new(config.listing.max_sessions));

        let mut entity_registry = EntityRegistry::new();
        entity_registry.register(Box::new(TaskDescriptor::new(task_service.clone())));
        entity_registry.register(Box::new(PropertyDescriptor::new(PropertyAppState {
            source: property_source.clone(),
            sessions: sessions.clone(),
            page_size: config.listing.page_size(),
            simulated_latency: config.listing.simulated_latency(),
        })));

        Self {
            config,
            task_service,
            property_source,
            sessions,
            entity_registry,
        }
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }
}
