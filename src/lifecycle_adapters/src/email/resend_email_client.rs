use lifecycle_core::{EmailClient, EmailClientError, EmailMessage};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

pub struct ResendEmailClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl ResendEmailClient {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl EmailClient for ResendEmailClient {
    #[tracing::instrument(name = "Sending email", skip_all)]
    async fn send_email(&self, message: &EmailMessage) -> Result<(), EmailClientError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| EmailClientError::UnexpectedError(e.to_string()))?;
        let url = base
            .join(SEND_EMAIL_PATH)
            .map_err(|e| EmailClientError::UnexpectedError(e.to_string()))?;

        let request_body = SendEmailRequest {
            from: &message.from,
            to: [message.to.as_ref().expose_secret()],
            subject: &message.subject,
            html: &message.html,
        };

        let response = self
            .http_client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| EmailClientError::UnexpectedError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

const SEND_EMAIL_PATH: &str = "/emails";

#[derive(serde::Serialize, Debug)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}
