use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{stored_object::StoredObject, user_id::UserId};

// ObjectStorage port trait and errors
#[derive(Debug, Error, Clone)]
pub enum ObjectStorageError {
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected storage error: {0}")]
    UnexpectedError(String),
}

impl PartialEq for ObjectStorageError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rejected { .. }, Self::Rejected { .. })
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Object storage reached through the elevated-privilege client.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// List one page of objects directly under `prefix`.
    async fn list(
        &self,
        prefix: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<StoredObject>, ObjectStorageError>;

    /// Remove every object in `paths` with a single request.
    async fn remove(&self, paths: &[String]) -> Result<(), ObjectStorageError>;
}

// IdentityAdmin port trait and errors
#[derive(Debug, Error, Clone)]
pub enum IdentityAdminError {
    /// Carries the store's own message.
    #[error("{0}")]
    UserNotFound(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("{0}")]
    UnexpectedError(String),
}

impl PartialEq for IdentityAdminError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserNotFound(_), Self::UserNotFound(_))
                | (Self::Rejected { .. }, Self::Rejected { .. })
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Administrative access to the identity store.
#[async_trait]
pub trait IdentityAdmin: Send + Sync {
    /// Delete the identity record. Rows referencing it are cleaned up by the
    /// store's own cascades.
    async fn delete_user(&self, user_id: &UserId) -> Result<(), IdentityAdminError>;
}
