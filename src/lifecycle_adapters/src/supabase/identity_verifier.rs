use lifecycle_core::{
    BearerToken, CallerIdentity, Email, IdentityVerifier, IdentityVerifierError, UserId,
};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::{API_KEY_HEADER, endpoint, rejection};

/// Resolves the caller through the auth server's `user` endpoint.
#[derive(Clone)]
pub struct SupabaseIdentityVerifier {
    http_client: Client,
    base_url: String,
    anon_key: Secret<String>,
}

impl SupabaseIdentityVerifier {
    pub fn new(base_url: String, anon_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            anon_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: Option<String>,
    email: Option<String>,
}

#[async_trait::async_trait]
impl IdentityVerifier for SupabaseIdentityVerifier {
    #[tracing::instrument(name = "Verifying caller", skip_all)]
    async fn verify(&self, token: &BearerToken) -> Result<CallerIdentity, IdentityVerifierError> {
        let response = self
            .http_client
            .get(endpoint(&self.base_url, "auth/v1/user"))
            .header(API_KEY_HEADER, self.anon_key.expose_secret())
            .bearer_auth(token.as_ref().expose_secret())
            .send()
            .await
            .map_err(|e| IdentityVerifierError::UnexpectedError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let (_, message) = rejection(response).await;
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    IdentityVerifierError::InvalidCredential(message)
                }
                _ => IdentityVerifierError::UnexpectedError(message),
            });
        }

        let user: AuthUser = response
            .json()
            .await
            .map_err(|e| IdentityVerifierError::UnexpectedError(e.to_string()))?;

        let user_id = user
            .id
            .and_then(|id| UserId::parse(id).ok())
            .ok_or(IdentityVerifierError::MissingIdentity)?;

        // An unusable address is the same as none at all
        let email = user.email.and_then(|email| Email::parse(email).ok());

        Ok(CallerIdentity::new(user_id, email))
    }
}
