use lifecycle_core::{IdentityAdmin, IdentityAdminError, UserId};
use reqwest::{Client, StatusCode};
use secrecy::Secret;

use super::{endpoint, rejection, with_service_role};

#[derive(Clone)]
pub struct SupabaseIdentityAdmin {
    http_client: Client,
    base_url: String,
    service_role_key: Secret<String>,
}

impl SupabaseIdentityAdmin {
    pub fn new(base_url: String, service_role_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            service_role_key,
        }
    }
}

#[async_trait::async_trait]
impl IdentityAdmin for SupabaseIdentityAdmin {
    #[tracing::instrument(name = "Deleting identity", skip(self))]
    async fn delete_user(&self, user_id: &UserId) -> Result<(), IdentityAdminError> {
        let request = self.http_client.delete(endpoint(
            &self.base_url,
            &format!("auth/v1/admin/users/{user_id}"),
        ));

        let response = with_service_role(request, &self.service_role_key)
            .send()
            .await
            .map_err(|e| IdentityAdminError::UnexpectedError(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            let (_, message) = rejection(response).await;
            let message = if message.is_empty() {
                "User not found".to_string()
            } else {
                message
            };
            return Err(IdentityAdminError::UserNotFound(message));
        }
        if !response.status().is_success() {
            let (status, message) = rejection(response).await;
            return Err(IdentityAdminError::Rejected { status, message });
        }

        Ok(())
    }
}
