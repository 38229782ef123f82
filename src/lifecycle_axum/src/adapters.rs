//! Axum implementations of the lifecycle HTTP traits.
//!
//! `InboundRequest` and `ResponseBuilder` live in `lifecycle_core`; the
//! newtypes here implement them for axum's types without tripping the
//! orphan rule.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  lifecycle_core::InboundRequest (trait)    │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest(http::request::Parts)         │
//! │  impl InboundRequest for AxumRequest { }   │
//! └────────────────────────────────────────────┘
//! ```
//!
//! The request wraps `Parts` rather than the whole request: the handlers take
//! no body, and `Parts` is `Sync`, so a borrowed request can be held across
//! awaits inside a `Send` future.

use axum::body::Body;
use axum::http::{Response, StatusCode, request::Parts};
use lifecycle_core::{InboundRequest, ResponseBuilder};

#[repr(transparent)]
pub struct AxumRequest(pub Parts);

impl From<Parts> for AxumRequest {
    fn from(parts: Parts) -> Self {
        AxumRequest(parts)
    }
}

impl From<axum::extract::Request> for AxumRequest {
    fn from(request: axum::extract::Request) -> Self {
        let (parts, _body) = request.into_parts();
        AxumRequest(parts)
    }
}

impl InboundRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers.get(name)?.to_str().ok()
    }

    fn method(&self) -> &str {
        self.0.method.as_str()
    }

    fn path(&self) -> &str {
        self.0.uri.path()
    }
}

/// Builds `Response<Body>` through `lifecycle_core::ResponseBuilder`.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.map(Body::from).unwrap_or_else(Body::empty);
        self.builder.body(body).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Invalid response parts");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

/// Helper function to create an Axum response builder
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
