//! Axum-specific lifecycle routes.
//!
//! These routes use axum's extractors to get the request, call the
//! framework-agnostic handlers, and return the axum response they build.

pub mod delete_my_account;
pub mod send_email_otp;

pub use delete_my_account::delete_my_account;
pub use send_email_otp::send_email_otp;
