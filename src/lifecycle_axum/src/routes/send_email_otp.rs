use axum::{
    extract::{Request, State},
    response::Response,
};
use lifecycle_adapters::handlers;
use lifecycle_application::OtpIssuerProvider;

use crate::adapters::{AxumRequest, response_builder};

/// Axum OTP issuance route.
#[tracing::instrument(name = "Send email OTP", skip_all)]
pub async fn send_email_otp<P>(State(providers): State<P>, request: Request) -> Response
where
    P: OtpIssuerProvider,
{
    let request = AxumRequest::from(request);
    handlers::handle_issue_otp(&providers, &request, response_builder()).await
}
