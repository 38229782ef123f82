use askama::Template;
use lifecycle_core::{
    BearerToken, Email, EmailClient, EmailClientError, EmailMessage, IdentityVerifier,
    LifecycleError, OTP_VALIDITY_MINUTES, OneTimeCode, OtpGenerator, OtpGeneratorError,
};

/// Sender identity and wording of the verification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEmailSettings {
    pub sender: String,
    pub subject: String,
    pub app_name: String,
}

impl Default for OtpEmailSettings {
    fn default() -> Self {
        Self {
            sender: "PharmC <onboarding@resend.dev>".to_string(),
            subject: "Your PharmC verification code".to_string(),
            app_name: "PharmC".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "otp_email.html")]
struct OtpEmailTemplate<'a> {
    app_name: &'a str,
    code: &'a str,
    expires_in_minutes: u32,
}

/// OTP issuer use case - has the trusted generator mint a code for the
/// caller and emails it to the caller's own address.
pub struct OtpIssuer<V, G, E>
where
    V: IdentityVerifier,
    G: OtpGenerator,
    E: EmailClient,
{
    verifier: V,
    generator: G,
    email_client: E,
    settings: OtpEmailSettings,
}

impl<V, G, E> OtpIssuer<V, G, E>
where
    V: IdentityVerifier,
    G: OtpGenerator,
    E: EmailClient,
{
    pub fn new(verifier: V, generator: G, email_client: E, settings: OtpEmailSettings) -> Self {
        Self {
            verifier,
            generator,
            email_client,
            settings,
        }
    }

    /// Execute the OTP issuer use case
    ///
    /// # Arguments
    /// * `token` - The caller's bearer credential, also forwarded to the generator
    ///
    /// # Returns
    /// Ok(()) once the provider accepted the email, or the LifecycleError
    /// describing the first step that failed
    #[tracing::instrument(name = "OtpIssuer::execute", skip_all)]
    pub async fn execute(&self, token: &BearerToken) -> Result<(), LifecycleError> {
        let identity = self.verifier.verify(token).await.map_err(|e| {
            tracing::debug!(error = %e, "Credential rejected");
            LifecycleError::Unauthenticated
        })?;

        // A caller without an address on file cannot receive a code
        let recipient = identity
            .email()
            .cloned()
            .ok_or(LifecycleError::Unauthenticated)?;

        let code = self.generator.generate(token).await.map_err(|e| {
            tracing::error!(error = %e, "OTP generation failed");
            match e {
                OtpGeneratorError::NoCode | OtpGeneratorError::MalformedCode => {
                    LifecycleError::OtpGenerationFailed(None)
                }
                other => LifecycleError::OtpGenerationFailed(Some(other.to_string())),
            }
        })?;

        let message = self.compose(recipient, &code)?;

        self.email_client
            .send_email(&message)
            .await
            .map_err(|e| match e {
                EmailClientError::Rejected { status, body } => {
                    tracing::error!(status, "Email provider rejected the message");
                    LifecycleError::DeliveryFailed(body)
                }
                EmailClientError::UnexpectedError(e) => {
                    tracing::error!(error = %e, "Email provider unreachable");
                    LifecycleError::UnexpectedServerError(e)
                }
            })?;

        tracing::info!(user_id = %identity.user_id(), "OTP sent");
        Ok(())
    }

    fn compose(&self, to: Email, code: &OneTimeCode) -> Result<EmailMessage, LifecycleError> {
        let html = OtpEmailTemplate {
            app_name: &self.settings.app_name,
            code: code.as_str(),
            expires_in_minutes: OTP_VALIDITY_MINUTES,
        }
        .render()
        .map_err(|e| LifecycleError::UnexpectedServerError(e.to_string()))?;

        Ok(EmailMessage {
            from: self.settings.sender.clone(),
            to,
            subject: self.settings.subject.clone(),
            html,
        })
    }
}
