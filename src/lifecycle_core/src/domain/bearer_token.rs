use secrecy::Secret;

use super::domain_error::DomainError;

const BEARER_SCHEME: &str = "bearer";

/// The caller's credential, taken from `Authorization: Bearer <token>`.
#[derive(Debug, Clone)]
pub struct BearerToken(Secret<String>);

impl BearerToken {
    /// Parse the value of an `Authorization` header.
    ///
    /// The scheme is matched case-insensitively and the token must be non-empty.
    pub fn from_authorization_header(value: &str) -> Result<Self, DomainError> {
        let (scheme, token) = value
            .trim()
            .split_once(' ')
            .ok_or(DomainError::MalformedBearerToken)?;

        if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
            return Err(DomainError::MalformedBearerToken);
        }

        let token = token.trim();
        if token.is_empty() {
            return Err(DomainError::MalformedBearerToken);
        }

        Ok(Self(Secret::new(token.to_owned())))
    }
}

impl From<Secret<String>> for BearerToken {
    fn from(value: Secret<String>) -> Self {
        Self(value)
    }
}

impl AsRef<Secret<String>> for BearerToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
