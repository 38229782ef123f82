pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    bearer_token::BearerToken,
    caller_identity::CallerIdentity,
    domain_error::DomainError,
    email::Email,
    email_message::EmailMessage,
    one_time_code::{OTP_VALIDITY_MINUTES, OneTimeCode},
    stored_object::{DeletionBatch, ObjectRef, StoredObject},
    user_id::UserId,
};

pub use ports::{
    repositories::{IdentityAdmin, IdentityAdminError, ObjectStorage, ObjectStorageError},
    services::{
        EmailClient, EmailClientError, IdentityVerifier, IdentityVerifierError, OtpGenerator,
        OtpGeneratorError,
    },
};

pub use envelope::ResponseEnvelope;
pub use error::LifecycleError;
pub use http_abstraction::{CORS_HEADERS, EnvelopeResponses, InboundRequest, ResponseBuilder};
