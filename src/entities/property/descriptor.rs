//! Entity descriptor for the property listing

use super::handlers::{PropertyAppState, list_facets, list_properties};
use crate::server::entity_registry::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the read-only Property listing
pub struct PropertyDescriptor {
    pub state: PropertyAppState,
}

impl PropertyDescriptor {
    pub fn new(state: PropertyAppState) -> Self {
        Self { state }
    }
}

impl EntityDescriptor for PropertyDescriptor {
    fn entity_type(&self) -> &str {
        "property"
    }

    fn plural(&self) -> &str {
        "properties"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/properties", get(list_properties))
            .route("/properties/facets", get(list_facets))
            .with_state(self.state.clone())
    }
}
