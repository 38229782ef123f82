use thiserror::Error;

/// Validation errors raised while constructing domain value objects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("User id must be a non-empty string without '/'")]
    InvalidUserId,
    #[error("Missing bearer token")]
    MissingBearerToken,
    #[error("Malformed authorization header")]
    MalformedBearerToken,
    #[error("One-time code must be a non-empty numeric string")]
    InvalidOneTimeCode,
}
