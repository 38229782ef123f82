//! Factories handing fully wired use cases to the request handlers.
//!
//! A provider owns the immutable, process-wide configuration. Building a use
//! case is where missing configuration is detected, so a misconfigured server
//! fails the request before any upstream service is contacted.

use lifecycle_core::{
    EmailClient, IdentityAdmin, IdentityVerifier, LifecycleError, ObjectStorage, OtpGenerator,
};

use crate::use_cases::{AccountEraser, OtpIssuer};

pub trait AccountEraserProvider: Clone + Send + Sync + 'static {
    type Verifier: IdentityVerifier;
    type Storage: ObjectStorage;
    type Admin: IdentityAdmin;

    /// Returns `LifecycleError::MisconfiguredServer` when a required setting is absent.
    fn account_eraser(
        &self,
    ) -> Result<AccountEraser<Self::Verifier, Self::Storage, Self::Admin>, LifecycleError>;
}

pub trait OtpIssuerProvider: Clone + Send + Sync + 'static {
    type Verifier: IdentityVerifier;
    type Generator: OtpGenerator;
    type Mailer: EmailClient;

    /// Returns `LifecycleError::MisconfiguredServer` when a required setting is absent.
    fn otp_issuer(
        &self,
    ) -> Result<OtpIssuer<Self::Verifier, Self::Generator, Self::Mailer>, LifecycleError>;
}
