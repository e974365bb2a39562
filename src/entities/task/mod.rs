//! Task entity module

pub mod descriptor;
pub mod handlers;
pub mod model;

pub use descriptor::TaskDescriptor;
pub use handlers::*;
pub use model::{NewTask, Task, TaskPatch, TaskStatus, parse_deadline};
