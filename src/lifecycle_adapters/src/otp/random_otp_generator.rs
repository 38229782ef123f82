use std::collections::HashMap;
use std::sync::Arc;

use lifecycle_core::{BearerToken, OneTimeCode, OtpGenerator, OtpGeneratorError};
use rand::Rng;
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

const CODE_DIGITS: usize = 6;

/// Local stand-in for the database function: mints a random six-digit code
/// and remembers the latest one per caller token.
#[derive(Default, Clone)]
pub struct RandomOtpGenerator {
    issued: Arc<RwLock<HashMap<String, String>>>,
}

impl RandomOtpGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn latest_code(&self, caller: &str) -> Option<String> {
        self.issued.read().await.get(caller).cloned()
    }
}

#[async_trait::async_trait]
impl OtpGenerator for RandomOtpGenerator {
    async fn generate(&self, caller: &BearerToken) -> Result<OneTimeCode, OtpGeneratorError> {
        let code = format!(
            "{:0width$}",
            rand::rng().random_range(0..1_000_000u32),
            width = CODE_DIGITS
        );

        self.issued
            .write()
            .await
            .insert(caller.as_ref().expose_secret().clone(), code.clone());

        OneTimeCode::parse(code).map_err(|_| OtpGeneratorError::MalformedCode)
    }
}
