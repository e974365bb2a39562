//! Property listing module

pub mod descriptor;
pub mod handlers;

pub use descriptor::PropertyDescriptor;
pub use handlers::*;
