pub mod local_jwt_verifier;

pub use local_jwt_verifier::{Claims, LocalJwtVerifier};

use lifecycle_core::{BearerToken, CallerIdentity, IdentityVerifier, IdentityVerifierError};

use crate::supabase::SupabaseIdentityVerifier;

/// The verifier chosen at startup: local when the JWT secret is configured,
/// remote otherwise.
#[derive(Clone)]
pub enum CallerVerifier {
    Local(LocalJwtVerifier),
    Remote(SupabaseIdentityVerifier),
}

#[async_trait::async_trait]
impl IdentityVerifier for CallerVerifier {
    async fn verify(&self, token: &BearerToken) -> Result<CallerIdentity, IdentityVerifierError> {
        match self {
            CallerVerifier::Local(verifier) => verifier.verify(token).await,
            CallerVerifier::Remote(verifier) => verifier.verify(token).await,
        }
    }
}
