//! Server module for building the HTTP server
//!
//! `ServerBuilder` assembles configuration and services into a `ServerHost`,
//! which the REST exposure turns into a router with:
//! - Task CRUD routes
//! - The property listing routes
//! - Health check routes

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use host::ServerHost;
