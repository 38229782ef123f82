//! Zero-cost HTTP abstraction traits for the lifecycle handlers.
//!
//! Web frameworks implement these traits on newtype wrappers of their own
//! request and response types, so the handlers stay framework-agnostic.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  lifecycle_core: Defines HTTP traits     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  lifecycle_axum: Newtype wrappers        │
//! │  struct AxumRequest(http Parts)          │
//! │  impl InboundRequest for AxumRequest { } │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  lifecycle_adapters::handlers use the    │
//! │  trait methods (generic over framework)  │
//! └──────────────────────────────────────────┘
//! ```

use crate::{
    domain::{bearer_token::BearerToken, domain_error::DomainError},
    envelope::ResponseEnvelope,
    error::LifecycleError,
};

/// CORS headers attached to every lifecycle response, preflight included.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    (
        "access-control-allow-headers",
        "authorization, x-client-info, apikey, content-type",
    ),
    ("access-control-allow-methods", "POST, OPTIONS"),
];

/// Trait for inbound HTTP requests.
///
/// # Implementation Notes
///
/// - Return `&str` references directly from the framework's data structures
/// - Header lookup must be case-insensitive
pub trait InboundRequest {
    /// Get a header value by name.
    ///
    /// Returns `None` if the header doesn't exist or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;

    /// CORS preflight requests are answered without running the handler.
    fn is_preflight(&self) -> bool {
        self.method().eq_ignore_ascii_case("OPTIONS")
    }

    /// Extract the caller's bearer credential from the `Authorization` header.
    fn bearer_token(&self) -> Result<BearerToken, DomainError> {
        let value = self
            .header("authorization")
            .ok_or(DomainError::MissingBearerToken)?;
        BearerToken::from_authorization_header(value)
    }
}

/// Trait for building HTTP responses.
///
/// Follows the builder pattern:
/// ```ignore
/// builder
///     .status(200)
///     .header("content-type", "application/json")
///     .json_body(json!({"ok": true}))
///     .build()
/// ```
pub trait ResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body with Content-Type header
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Envelope and CORS helpers, implemented for every `ResponseBuilder`.
pub trait EnvelopeResponses: ResponseBuilder {
    fn with_cors(self) -> Self {
        CORS_HEADERS
            .iter()
            .fold(self, |builder, (name, value)| builder.header(name, value))
    }

    /// 200 with an empty body.
    fn preflight(self) -> Self::Response {
        self.with_cors().status(200).build()
    }

    fn envelope(self, status: u16, envelope: &ResponseEnvelope) -> Self::Response {
        self.with_cors()
            .status(status)
            .json_body(envelope.to_json())
            .build()
    }

    fn success(self, message: &str) -> Self::Response {
        self.envelope(200, &ResponseEnvelope::success(message))
    }

    fn failure(self, error: &LifecycleError) -> Self::Response {
        self.envelope(error.status_code(), &error.envelope())
    }
}

impl<T: ResponseBuilder> EnvelopeResponses for T {}
