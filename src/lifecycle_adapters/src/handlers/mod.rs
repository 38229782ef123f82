//! Framework-agnostic lifecycle handlers.
//!
//! These handlers hold the request flow without any framework dependency.
//! Framework-specific routes wrap their request, call a handler with a
//! response builder, and return whatever the builder produced.

pub mod erase_account;
pub mod issue_otp;

pub use erase_account::handle_erase_account;
pub use issue_otp::handle_issue_otp;
