use axum::{
    extract::{Request, State},
    response::Response,
};
use lifecycle_adapters::handlers;
use lifecycle_application::AccountEraserProvider;

use crate::adapters::{AxumRequest, response_builder};

/// Axum account deletion route.
#[tracing::instrument(name = "Delete my account", skip_all)]
pub async fn delete_my_account<P>(State(providers): State<P>, request: Request) -> Response
where
    P: AccountEraserProvider,
{
    let request = AxumRequest::from(request);
    handlers::handle_erase_account(&providers, &request, response_builder()).await
}
