//! Storage implementations

pub mod in_memory;
pub mod static_source;

pub use in_memory::InMemoryTaskService;
pub use static_source::StaticPropertySource;
