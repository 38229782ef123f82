use config::{Config, ConfigError, File, Source};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{SETTINGS_FILE, env, prod};

/// Process-wide settings, loaded once at startup and shared read-only.
///
/// The upstream URL and keys stay optional: a missing value fails the
/// requests that need it instead of the whole process.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub service: ServiceSettings,
    pub supabase: SupabaseSettings,
    pub email: EmailSettings,
    pub paging: PagingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub anon_key: Option<Secret<String>>,
    #[serde(default)]
    pub service_role_key: Option<Secret<String>>,
    /// When present, caller tokens are verified locally instead of remotely.
    #[serde(default)]
    pub jwt_secret: Option<Secret<String>>,
    pub bucket: String,
    pub otp_function: String,
    pub timeout_in_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailSettings {
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<Secret<String>>,
    pub sender: String,
    pub subject: String,
    pub app_name: String,
    pub timeout_in_millis: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagingSettings {
    pub page_size: usize,
    pub max_pages: usize,
}

impl Settings {
    /// Load `.env`, the optional settings file and the environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_sources(File::with_name(SETTINGS_FILE).required(false), |name| {
            std::env::var(name).ok()
        })
    }

    /// Build settings from one file source and an environment lookup.
    pub fn from_sources<S, F>(file: S, lookup: F) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
        F: Fn(&str) -> Option<String>,
    {
        // Empty variables count as unset
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Config::builder()
            .set_default("service.address", prod::APP_ADDRESS)?
            .set_default("supabase.bucket", prod::storage::BUCKET)?
            .set_default("supabase.otp_function", prod::otp::FUNCTION)?
            .set_default("supabase.timeout_in_millis", prod::TIMEOUT_IN_MILLIS as i64)?
            .set_default("email.base_url", prod::email_client::BASE_URL)?
            .set_default("email.sender", prod::email_client::SENDER)?
            .set_default("email.subject", prod::email_client::SUBJECT)?
            .set_default("email.app_name", prod::email_client::APP_NAME)?
            .set_default("email.timeout_in_millis", prod::TIMEOUT_IN_MILLIS as i64)?
            .set_default("paging.page_size", prod::storage::PAGE_SIZE as i64)?
            .set_default("paging.max_pages", prod::storage::MAX_PAGES as i64)?
            .add_source(file)
            .set_override_option("service.address", var(env::ACCOUNT_SERVICE_ADDRESS_ENV_VAR))?
            .set_override_option("supabase.url", var(env::SUPABASE_URL_ENV_VAR))?
            .set_override_option("supabase.anon_key", var(env::SUPABASE_ANON_KEY_ENV_VAR))?
            .set_override_option(
                "supabase.service_role_key",
                var(env::SUPABASE_SERVICE_ROLE_KEY_ENV_VAR),
            )?
            .set_override_option("supabase.jwt_secret", var(env::SUPABASE_JWT_SECRET_ENV_VAR))?
            .set_override_option("email.api_key", var(env::RESEND_API_KEY_ENV_VAR))?
            .build()?
            .try_deserialize()
    }

    /// Names of the settings the account eraser needs but does not have.
    pub fn missing_for_eraser(&self) -> Vec<&'static str> {
        let mut missing = self.missing_supabase_basics();
        if !is_set(&self.supabase.service_role_key) {
            missing.push(env::SUPABASE_SERVICE_ROLE_KEY_ENV_VAR);
        }
        missing
    }

    /// Names of the settings the OTP issuer needs but does not have.
    pub fn missing_for_otp(&self) -> Vec<&'static str> {
        let mut missing = self.missing_supabase_basics();
        if !is_set(&self.email.api_key) {
            missing.push(env::RESEND_API_KEY_ENV_VAR);
        }
        missing
    }

    /// The JWT secret for local verification, unless absent or blank.
    pub fn jwt_secret(&self) -> Option<&Secret<String>> {
        self.supabase
            .jwt_secret
            .as_ref()
            .filter(|secret| !secret.expose_secret().trim().is_empty())
    }

    fn missing_supabase_basics(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self
            .supabase
            .url
            .as_deref()
            .is_none_or(|url| url.trim().is_empty())
        {
            missing.push(env::SUPABASE_URL_ENV_VAR);
        }
        if !is_set(&self.supabase.anon_key) {
            missing.push(env::SUPABASE_ANON_KEY_ENV_VAR);
        }
        missing
    }
}

fn is_set(secret: &Option<Secret<String>>) -> bool {
    secret
        .as_ref()
        .is_some_and(|s| !s.expose_secret().trim().is_empty())
}
