pub mod lifecycle_service;
pub mod tracing;

pub use lifecycle_service::{LifecycleService, server_error_for_panic};
