//! REST adapters for a Supabase project.
//!
//! Every adapter talks to one endpoint family and carries its own key. The
//! public key pairs with the caller's bearer; the privileged key is sent as
//! both `apikey` and bearer.

pub mod identity_admin;
pub mod identity_verifier;
pub mod object_storage;
pub mod otp_generator;

pub use identity_admin::SupabaseIdentityAdmin;
pub use identity_verifier::SupabaseIdentityVerifier;
pub use object_storage::SupabaseObjectStorage;
pub use otp_generator::SupabaseOtpGenerator;

use reqwest::{RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};

const API_KEY_HEADER: &str = "apikey";

/// Attach the privileged key as `apikey` and as bearer.
fn with_service_role(request: RequestBuilder, key: &Secret<String>) -> RequestBuilder {
    request
        .header(API_KEY_HEADER, key.expose_secret())
        .bearer_auth(key.expose_secret())
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// Status code and the most specific message found in an error reply.
///
/// The services disagree on the field name, so the usual candidates are
/// tried in order before falling back to the raw body.
async fn rejection(response: Response) -> (u16, String) {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            ["msg", "message", "error_description", "error"]
                .iter()
                .find_map(|field| value.get(field)?.as_str().map(str::to_owned))
        })
        .unwrap_or(body);

    (status, message)
}
