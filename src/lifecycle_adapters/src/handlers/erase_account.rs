//! Framework-agnostic account deletion handler.

use lifecycle_application::AccountEraserProvider;
use lifecycle_core::{EnvelopeResponses, InboundRequest, LifecycleError, ResponseBuilder};

/// Handle an account deletion request - framework agnostic.
///
/// Preflight requests are answered immediately. Otherwise the eraser is built
/// from the provider (failing on missing configuration), the caller's bearer
/// credential is taken from the request, and the erasure runs to completion.
///
/// # Type Parameters
/// * `P` - Provider building the account eraser
/// * `R` - Inbound request of the framework being used
/// * `B` - Response builder of the framework being used
///
/// # Returns
/// The HTTP response: `Account deleted` on success, the error envelope otherwise
pub async fn handle_erase_account<P, R, B>(providers: &P, request: &R, builder: B) -> B::Response
where
    P: AccountEraserProvider,
    R: InboundRequest + Sync,
    B: ResponseBuilder,
{
    if request.is_preflight() {
        return builder.preflight();
    }

    let eraser = match providers.account_eraser() {
        Ok(eraser) => eraser,
        Err(e) => return builder.failure(&e),
    };

    let token = match request.bearer_token() {
        Ok(token) => token,
        Err(e) => {
            tracing::debug!(error = %e, "No usable bearer credential");
            return builder.failure(&LifecycleError::Unauthenticated);
        }
    };

    match eraser.execute(&token).await {
        Ok(report) => match &report.listing_failure {
            Some(failure) if failure.is_fatal() => builder.failure(failure),
            Some(failure) => {
                tracing::warn!(error = ?failure, "Account deleted with objects left behind");
                builder.success("Account deleted")
            }
            None => builder.success("Account deleted"),
        },
        Err(e) => builder.failure(&e),
    }
}
