use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    bearer_token::BearerToken, caller_identity::CallerIdentity, email_message::EmailMessage,
    one_time_code::OneTimeCode,
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdentityVerifierError {
    #[error("Credential did not resolve to a user")]
    MissingIdentity,
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Port trait resolving a bearer credential to the calling user
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &BearerToken) -> Result<CallerIdentity, IdentityVerifierError>;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OtpGeneratorError {
    #[error("Generator returned no code")]
    NoCode,
    #[error("Generator returned a malformed code")]
    MalformedCode,
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{0}")]
    UnexpectedError(String),
}

/// Port trait for the trusted one-time code generator.
///
/// The generator runs with the caller's own credential, so the code is scoped
/// to the caller and its storage and expiry are the generator's business.
#[async_trait]
pub trait OtpGenerator: Send + Sync {
    async fn generate(&self, caller: &BearerToken) -> Result<OneTimeCode, OtpGeneratorError>;
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmailClientError {
    /// The provider answered with a non-success status.
    #[error("Email provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    /// No response was received at all.
    #[error("{0}")]
    UnexpectedError(String),
}

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(&self, message: &EmailMessage) -> Result<(), EmailClientError>;
}
