//! Tower Service implementations

pub mod core;
pub mod request;

pub use core::TaskDispatcher;
pub use request::ValidatedTask;
