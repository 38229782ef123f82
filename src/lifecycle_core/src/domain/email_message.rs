use super::email::Email;

/// A fully composed outbound email.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub from: String,
    pub to: Email,
    pub subject: String,
    pub html: String,
}
