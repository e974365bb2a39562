//! Entities module - contains the business entities and their HTTP routes

pub mod property;
pub mod task;

pub use property::PropertyDescriptor;
pub use task::{Task, TaskDescriptor};
