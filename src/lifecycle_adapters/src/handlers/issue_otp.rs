//! Framework-agnostic OTP issuance handler.

use lifecycle_application::OtpIssuerProvider;
use lifecycle_core::{EnvelopeResponses, InboundRequest, LifecycleError, ResponseBuilder};

/// Handle an OTP request - framework agnostic.
///
/// Configuration is checked before the credential so that a misconfigured
/// server never reaches the verifier, the generator or the email provider.
pub async fn handle_issue_otp<P, R, B>(providers: &P, request: &R, builder: B) -> B::Response
where
    P: OtpIssuerProvider,
    R: InboundRequest + Sync,
    B: ResponseBuilder,
{
    if request.is_preflight() {
        return builder.preflight();
    }

    let issuer = match providers.otp_issuer() {
        Ok(issuer) => issuer,
        Err(e) => return builder.failure(&e),
    };

    let token = match request.bearer_token() {
        Ok(token) => token,
        Err(e) => {
            tracing::debug!(error = %e, "No usable bearer credential");
            return builder.failure(&LifecycleError::Unauthenticated);
        }
    };

    match issuer.execute(&token).await {
        Ok(()) => builder.success("OTP sent"),
        Err(e) => builder.failure(&e),
    }
}
