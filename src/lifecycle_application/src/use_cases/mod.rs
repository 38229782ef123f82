pub mod erase_account;
pub mod issue_otp;

// Re-export for convenience
pub use erase_account::{
    AccountEraser, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, ErasureReport, PagingPolicy,
};
pub use issue_otp::{OtpEmailSettings, OtpIssuer};
