//! Entity registry collecting the route sets of every exposed entity

use axum::Router;
use std::collections::BTreeMap;

/// Trait that describes how to build routes for an entity
///
/// Each exposed entity (tasks, the property listing) implements this trait
/// to provide its routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "task")
    fn entity_type(&self) -> &str;

    /// The plural form, also the route prefix (e.g., "tasks")
    fn plural(&self) -> &str;

    /// Build the routes for this entity, with state already attached
    fn build_routes(&self) -> Router;
}

/// Registry for all entities in the application
///
/// Descriptors are keyed by entity type; registering the same type twice
/// replaces the earlier descriptor.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity type name will be used as the key.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Build a router with all registered entity routes
    ///
    /// This merges all entity routes into a single router.
    pub fn build_routes(&self) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes());
        }

        router
    }

    /// Get all registered entity types, sorted
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Route prefixes of all registered entities, sorted by entity type
    pub fn resource_paths(&self) -> Vec<String> {
        self.descriptors
            .values()
            .map(|d| format!("/{}", d.plural()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::get;

    struct StubDescriptor {
        entity_type: String,
        plural: String,
    }

    impl StubDescriptor {
        fn new(entity_type: &str, plural: &str) -> Self {
            Self {
                entity_type: entity_type.to_string(),
                plural: plural.to_string(),
            }
        }
    }

    impl EntityDescriptor for StubDescriptor {
        fn entity_type(&self) -> &str {
            &self.entity_type
        }

        fn plural(&self) -> &str {
            &self.plural
        }

        fn build_routes(&self) -> Router {
            Router::new().route(&format!("/{}", self.plural), get(|| async { "ok" }))
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = EntityRegistry::new();
        assert!(registry.entity_types().is_empty());
        assert!(registry.resource_paths().is_empty());
    }

    #[test]
    fn test_register_entities_sorted() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(StubDescriptor::new("task", "tasks")));
        registry.register(Box::new(StubDescriptor::new("property", "properties")));

        assert_eq!(registry.entity_types(), vec!["property", "task"]);
        assert_eq!(registry.resource_paths(), vec!["/properties", "/tasks"]);
    }

    #[test]
    fn test_register_duplicate_replaces() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(StubDescriptor::new("task", "tasks")));
        registry.register(Box::new(StubDescriptor::new("task", "todos")));

        assert_eq!(registry.entity_types().len(), 1);
        assert_eq!(registry.resource_paths(), vec!["/todos"]);
    }

    #[test]
    fn test_build_routes_merges_descriptors() {
        let mut registry = EntityRegistry::new();
        registry.register(Box::new(StubDescriptor::new("task", "tasks")));
        registry.register(Box::new(StubDescriptor::new("property", "properties")));
        let _router = registry.build_routes();
    }
}
