//! Axum integration for the account lifecycle handlers.
//!
//! # Usage
//!
//! ```ignore
//! use axum::{Router, routing::any};
//! use lifecycle_adapters::SupabaseProviders;
//! use lifecycle_axum::routes;
//!
//! let app = Router::new()
//!     .route("/delete-my-account", any(routes::delete_my_account::<SupabaseProviders>))
//!     .route("/send-email-otp", any(routes::send_email_otp::<SupabaseProviders>))
//!     .with_state(providers);
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
