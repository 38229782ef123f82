use std::any::Any;

use axum::{
    Router,
    body::Body,
    http::Response,
    routing::{any, get},
};
use lifecycle_application::{AccountEraserProvider, OtpIssuerProvider};
use lifecycle_axum::{response_builder, routes};
use lifecycle_core::{EnvelopeResponses, LifecycleError};
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Account lifecycle service exposing the deletion and OTP routes.
pub struct LifecycleService {
    router: Router,
}

impl LifecycleService {
    /// Create a new LifecycleService around the given providers
    ///
    /// # Arguments
    /// * `providers` - Builds the use cases per request; must be cheap to clone
    ///
    /// # Note on Architecture
    /// Both routes share one provider value as router state. Only OPTIONS and
    /// POST are meaningful, but every method is routed to the handlers.
    pub fn new<P>(providers: P) -> Self
    where
        P: AccountEraserProvider + OtpIssuerProvider,
    {
        let router = Router::new()
            .route("/delete-my-account", any(routes::delete_my_account::<P>))
            .route("/send-email-otp", any(routes::send_email_otp::<P>))
            .with_state(providers)
            .route("/health", get(health));

        Self { router }
    }

    fn with_catch_panic_layer(mut self) -> Self {
        self.router = self
            .router
            .layer(CatchPanicLayer::custom(server_error_for_panic));
        self
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested into another application
    pub fn as_nested_router(self) -> Router {
        self.with_catch_panic_layer().with_trace_layer().router
    }

    /// Run the service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("Account service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}

async fn health() -> &'static str {
    "OK"
}

/// Last-resort response for a handler that panicked.
pub fn server_error_for_panic(payload: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Handler panicked");
    response_builder().failure(&LifecycleError::UnexpectedServerError(detail))
}
