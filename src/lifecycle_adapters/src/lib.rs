//! Adapters for the account lifecycle service: configuration, upstream
//! REST clients, in-memory stand-ins, providers and the framework-agnostic
//! request handlers.

pub mod auth_validation;
pub mod config;
pub mod email;
pub mod handlers;
pub mod otp;
pub mod persistence;
pub mod providers;
pub mod supabase;

pub use auth_validation::{CallerVerifier, LocalJwtVerifier};
pub use crate::config::Settings;
pub use email::{MockEmailClient, ResendEmailClient};
pub use otp::RandomOtpGenerator;
pub use persistence::{HashMapIdentityStore, HashMapObjectStorage};
pub use providers::{InMemoryProviders, ProviderError, SupabaseProviders};
pub use supabase::{
    SupabaseIdentityAdmin, SupabaseIdentityVerifier, SupabaseObjectStorage, SupabaseOtpGenerator,
};
