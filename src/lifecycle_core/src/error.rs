//! The closed failure taxonomy shared by both request handlers.

use thiserror::Error;

use crate::envelope::ResponseEnvelope;

/// Every way a lifecycle request can fail.
///
/// The `Display` text is the human-readable `message` of the response
/// envelope; the payload, when present, travels as `details` (or `error` for
/// unexpected failures) verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Missing server env vars")]
    MisconfiguredServer(String),

    #[error("Failed to create OTP")]
    OtpGenerationFailed(Option<String>),

    #[error("Failed to delete user")]
    IdentityDeletionFailed(String),

    #[error("Email sending failed")]
    DeliveryFailed(String),

    /// Never surfaced to callers: erasure carries on without the listing.
    #[error("Failed to list stored objects")]
    ListingFailed(String),

    #[error("Server error")]
    UnexpectedServerError(String),
}

impl LifecycleError {
    pub fn status_code(&self) -> u16 {
        match self {
            LifecycleError::Unauthenticated => 401,
            LifecycleError::DeliveryFailed(_) => 502,
            LifecycleError::MisconfiguredServer(_)
            | LifecycleError::OtpGenerationFailed(_)
            | LifecycleError::IdentityDeletionFailed(_)
            | LifecycleError::ListingFailed(_)
            | LifecycleError::UnexpectedServerError(_) => 500,
        }
    }

    /// Whether this failure ends the request.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LifecycleError::ListingFailed(_))
    }

    pub fn envelope(&self) -> ResponseEnvelope {
        let envelope = ResponseEnvelope::failure(self.to_string());
        match self {
            LifecycleError::Unauthenticated => envelope,
            LifecycleError::OtpGenerationFailed(details) => match details {
                Some(details) => envelope.with_details(details.clone()),
                None => envelope,
            },
            LifecycleError::MisconfiguredServer(details)
            | LifecycleError::IdentityDeletionFailed(details)
            | LifecycleError::DeliveryFailed(details)
            | LifecycleError::ListingFailed(details) => envelope.with_details(details.clone()),
            LifecycleError::UnexpectedServerError(error) => envelope.with_error(error.clone()),
        }
    }
}
