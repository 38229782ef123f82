use lifecycle_core::{BearerToken, OneTimeCode, OtpGenerator, OtpGeneratorError};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;

use super::{API_KEY_HEADER, endpoint, rejection};

/// Calls the database function that mints and stores a code for the caller.
///
/// The function runs under the caller's own credential, so it can only issue
/// a code for the caller.
#[derive(Clone)]
pub struct SupabaseOtpGenerator {
    http_client: Client,
    base_url: String,
    anon_key: Secret<String>,
    function: String,
}

impl SupabaseOtpGenerator {
    pub fn new(
        base_url: String,
        anon_key: Secret<String>,
        function: String,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            anon_key,
            function,
        }
    }
}

#[async_trait::async_trait]
impl OtpGenerator for SupabaseOtpGenerator {
    #[tracing::instrument(name = "Generating OTP", skip_all, fields(function = %self.function))]
    async fn generate(&self, caller: &BearerToken) -> Result<OneTimeCode, OtpGeneratorError> {
        let response = self
            .http_client
            .post(endpoint(
                &self.base_url,
                &format!("rest/v1/rpc/{}", self.function),
            ))
            .header(API_KEY_HEADER, self.anon_key.expose_secret())
            .bearer_auth(caller.as_ref().expose_secret())
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| OtpGeneratorError::UnexpectedError(e.to_string()))?;

        if !response.status().is_success() {
            let (status, message) = rejection(response).await;
            return Err(OtpGeneratorError::Rejected { status, message });
        }

        let reply: Value = response
            .json()
            .await
            .map_err(|_| OtpGeneratorError::MalformedCode)?;

        let raw = match reply {
            Value::String(code) => code,
            Value::Number(code) => code.to_string(),
            _ => return Err(OtpGeneratorError::NoCode),
        };

        OneTimeCode::parse(raw).map_err(|_| OtpGeneratorError::NoCode)
    }
}
