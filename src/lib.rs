//! # Account Lifecycle
//!
//! Facade crate re-exporting the public APIs of the account lifecycle
//! components: caller-initiated account erasure and email one-time codes.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! account_lifecycle = { path = "../account_lifecycle" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `BearerToken`, `Email`, `OneTimeCode`, `DeletionBatch`
//! - **Ports**: `IdentityVerifier`, `ObjectStorage`, `IdentityAdmin`, `OtpGenerator`, `EmailClient`
//! - **Use cases**: `AccountEraser`, `OtpIssuer`
//! - **Adapters**: Supabase and Resend clients, in-memory stand-ins, providers
//! - **Service**: `LifecycleService`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use lifecycle_core::*;
}

pub use lifecycle_core::{
    BearerToken, CallerIdentity, DeletionBatch, DomainError, Email, EmailMessage, LifecycleError,
    OTP_VALIDITY_MINUTES, ObjectRef, OneTimeCode, ResponseEnvelope, StoredObject, UserId,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use lifecycle_core::{
        EmailClient, EmailClientError, IdentityAdmin, IdentityAdminError, IdentityVerifier,
        IdentityVerifierError, ObjectStorage, ObjectStorageError, OtpGenerator, OtpGeneratorError,
    };
}

pub use ports::*;

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use lifecycle_application::*;
}

pub use lifecycle_application::{
    AccountEraser, AccountEraserProvider, ErasureReport, OtpEmailSettings, OtpIssuer,
    OtpIssuerProvider, PagingPolicy,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic request handlers
    pub mod handlers {
        pub use lifecycle_adapters::handlers::*;
    }

    /// Supabase REST clients
    pub mod supabase {
        pub use lifecycle_adapters::supabase::*;
    }

    /// In-memory stores
    pub mod persistence {
        pub use lifecycle_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use lifecycle_adapters::email::*;
    }

    /// Caller verification
    pub mod auth {
        pub use lifecycle_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use lifecycle_adapters::config::*;
    }

    /// Axum integration
    pub mod axum {
        pub use lifecycle_axum::*;
    }
}

pub use lifecycle_adapters::{
    InMemoryProviders, MockEmailClient, ResendEmailClient, Settings, SupabaseProviders,
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use lifecycle_service::LifecycleService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
