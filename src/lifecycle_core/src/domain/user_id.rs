use std::fmt;

use super::domain_error::DomainError;

/// Opaque, stable identifier of a user in the identity store.
///
/// Also the top-level folder of every object the user owns, so it may not
/// contain a path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() || raw.contains('/') {
            return Err(DomainError::InvalidUserId);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
