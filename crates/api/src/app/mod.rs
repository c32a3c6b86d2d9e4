//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers (one file per resource area)
//! - `dto.rs`: request DTOs and payload shape validation
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use pressgate_auth::{Hs256Validator, TokenValidator};
use pressgate_upstream::ContentClient;

use crate::gateway::GatewayServices;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(jwt_secret: String, upstream_url: String) -> Router {
    let validator: Arc<dyn TokenValidator> = Arc::new(Hs256Validator::new(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState { validator };

    let services = Arc::new(GatewayServices::from_client(ContentClient::new(
        upstream_url,
    )));

    // Protected routes: everything except /health requires a principal.
    let protected = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            auth_state,
            middleware::auth_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected)
        .layer(ServiceBuilder::new())
}
