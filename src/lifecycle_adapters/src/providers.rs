//! Concrete providers wiring the use cases to adapters.

use std::sync::Arc;
use std::time::Duration;

use lifecycle_application::{
    AccountEraser, AccountEraserProvider, OtpEmailSettings, OtpIssuer, OtpIssuerProvider,
    PagingPolicy,
};
use lifecycle_core::LifecycleError;
use reqwest::Client;
use secrecy::Secret;
use thiserror::Error;

use crate::auth_validation::{CallerVerifier, LocalJwtVerifier};
use crate::config::Settings;
use crate::email::{MockEmailClient, ResendEmailClient};
use crate::otp::RandomOtpGenerator;
use crate::persistence::{HashMapIdentityStore, HashMapObjectStorage};
use crate::supabase::{
    SupabaseIdentityAdmin, SupabaseIdentityVerifier, SupabaseObjectStorage, SupabaseOtpGenerator,
};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Providers backed by a Supabase project and the Resend API.
#[derive(Clone)]
pub struct SupabaseProviders {
    settings: Arc<Settings>,
    supabase_client: Client,
    email_client: Client,
}

impl SupabaseProviders {
    pub fn new(settings: Settings) -> Result<Self, ProviderError> {
        let supabase_client = Client::builder()
            .timeout(Duration::from_millis(settings.supabase.timeout_in_millis))
            .build()?;
        let email_client = Client::builder()
            .timeout(Duration::from_millis(settings.email.timeout_in_millis))
            .build()?;

        Ok(Self {
            settings: Arc::new(settings),
            supabase_client,
            email_client,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn base_url(&self) -> String {
        self.settings.supabase.url.clone().unwrap_or_default()
    }

    fn anon_key(&self) -> Secret<String> {
        secret_or_empty(&self.settings.supabase.anon_key)
    }

    fn caller_verifier(&self) -> CallerVerifier {
        match self.settings.jwt_secret() {
            Some(secret) => CallerVerifier::Local(LocalJwtVerifier::new(secret.clone())),
            None => CallerVerifier::Remote(SupabaseIdentityVerifier::new(
                self.base_url(),
                self.anon_key(),
                self.supabase_client.clone(),
            )),
        }
    }
}

fn secret_or_empty(secret: &Option<Secret<String>>) -> Secret<String> {
    secret
        .clone()
        .unwrap_or_else(|| Secret::new(String::new()))
}

fn ensure_configured(missing: Vec<&'static str>) -> Result<(), LifecycleError> {
    if missing.is_empty() {
        return Ok(());
    }
    let missing = missing.join(", ");
    tracing::error!(missing = %missing, "Missing server configuration");
    Err(LifecycleError::MisconfiguredServer(missing))
}

impl AccountEraserProvider for SupabaseProviders {
    type Verifier = CallerVerifier;
    type Storage = SupabaseObjectStorage;
    type Admin = SupabaseIdentityAdmin;

    fn account_eraser(
        &self,
    ) -> Result<AccountEraser<Self::Verifier, Self::Storage, Self::Admin>, LifecycleError> {
        ensure_configured(self.settings.missing_for_eraser())?;

        let service_role_key = secret_or_empty(&self.settings.supabase.service_role_key);
        let storage = SupabaseObjectStorage::new(
            self.base_url(),
            service_role_key.clone(),
            self.settings.supabase.bucket.clone(),
            self.supabase_client.clone(),
        );
        let admin = SupabaseIdentityAdmin::new(
            self.base_url(),
            service_role_key,
            self.supabase_client.clone(),
        );

        let paging = PagingPolicy::new(
            self.settings.paging.page_size,
            self.settings.paging.max_pages,
        );

        Ok(AccountEraser::new(self.caller_verifier(), storage, admin).with_paging(paging))
    }
}

impl OtpIssuerProvider for SupabaseProviders {
    type Verifier = CallerVerifier;
    type Generator = SupabaseOtpGenerator;
    type Mailer = ResendEmailClient;

    fn otp_issuer(
        &self,
    ) -> Result<OtpIssuer<Self::Verifier, Self::Generator, Self::Mailer>, LifecycleError> {
        ensure_configured(self.settings.missing_for_otp())?;

        let generator = SupabaseOtpGenerator::new(
            self.base_url(),
            self.anon_key(),
            self.settings.supabase.otp_function.clone(),
            self.supabase_client.clone(),
        );
        let mailer = ResendEmailClient::new(
            self.settings.email.base_url.clone(),
            secret_or_empty(&self.settings.email.api_key),
            self.email_client.clone(),
        );
        let email = OtpEmailSettings {
            sender: self.settings.email.sender.clone(),
            subject: self.settings.email.subject.clone(),
            app_name: self.settings.email.app_name.clone(),
        };

        Ok(OtpIssuer::new(
            self.caller_verifier(),
            generator,
            mailer,
            email,
        ))
    }
}

/// Providers backed by in-memory adapters, for local runs and tests.
#[derive(Clone, Default)]
pub struct InMemoryProviders {
    pub identities: HashMapIdentityStore,
    pub storage: HashMapObjectStorage,
    pub generator: RandomOtpGenerator,
    pub mailer: MockEmailClient,
    pub paging: Option<PagingPolicy>,
}

impl InMemoryProviders {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountEraserProvider for InMemoryProviders {
    type Verifier = HashMapIdentityStore;
    type Storage = HashMapObjectStorage;
    type Admin = HashMapIdentityStore;

    fn account_eraser(
        &self,
    ) -> Result<AccountEraser<Self::Verifier, Self::Storage, Self::Admin>, LifecycleError> {
        Ok(AccountEraser::new(
            self.identities.clone(),
            self.storage.clone(),
            self.identities.clone(),
        )
        .with_paging(self.paging.unwrap_or_default()))
    }
}

impl OtpIssuerProvider for InMemoryProviders {
    type Verifier = HashMapIdentityStore;
    type Generator = RandomOtpGenerator;
    type Mailer = MockEmailClient;

    fn otp_issuer(
        &self,
    ) -> Result<OtpIssuer<Self::Verifier, Self::Generator, Self::Mailer>, LifecycleError> {
        Ok(OtpIssuer::new(
            self.identities.clone(),
            self.generator.clone(),
            self.mailer.clone(),
            OtpEmailSettings::default(),
        ))
    }
}
