use secrecy::{ExposeSecret, Secret};

use super::domain_error::DomainError;

/// How long a freshly generated code stays valid. Enforced by the generator,
/// only quoted in the email sent to the user.
pub const OTP_VALIDITY_MINUTES: u32 = 10;

/// A one-time numeric code produced by the trusted generator.
#[derive(Debug, Clone)]
pub struct OneTimeCode(Secret<String>);

impl OneTimeCode {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidOneTimeCode);
        }
        Ok(Self(Secret::new(raw)))
    }

    pub fn as_str(&self) -> &str {
        self.0.expose_secret()
    }
}

impl PartialEq for OneTimeCode {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}
