//! Tower Layer implementations for the task endpoint

pub mod validation;

pub use validation::{TaskValidationLayer, TaskValidationService};
