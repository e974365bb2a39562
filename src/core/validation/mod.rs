//! Validation and filtering of request payloads
//!
//! Payloads derive `validator::Validate` for their rules and implement
//! [`Normalize`] using the filters in [`filters`]; the [`ValidatedJson`]
//! extractor runs both before a handler sees the data.

pub mod extractor;
pub mod filters;

pub use extractor::{Normalize, ValidatedJson};
