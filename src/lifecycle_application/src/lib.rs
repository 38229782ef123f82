pub mod providers;
pub mod use_cases;

pub use providers::{AccountEraserProvider, OtpIssuerProvider};
pub use use_cases::{
    AccountEraser, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, ErasureReport, OtpEmailSettings,
    OtpIssuer, PagingPolicy,
};
