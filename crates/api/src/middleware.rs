use std::sync::Arc;

use axum::{
    extract::State,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use uuid::Uuid;

use pressgate_auth::TokenValidator;

use crate::app::errors;
use crate::context::PrincipalContext;
use crate::gateway::GatewayError;

#[derive(Clone)]
pub struct AuthState {
    pub validator: Arc<dyn TokenValidator>,
}

/// Establish the request principal from the `Authorization: Bearer` header.
///
/// On success the [`PrincipalContext`] is available to every handler via
/// request extensions; on failure the request is answered here and never
/// reaches a handler.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let Some(token) = extract_bearer(req.headers()) else {
        return errors::gateway_error_to_response(GatewayError::Unauthenticated);
    };

    match state.validator.validate(token, Utc::now()) {
        Ok(principal) => {
            let request_id = Uuid::now_v7();
            tracing::debug!(
                %request_id,
                principal = %principal.id,
                role = %principal.role,
                "authenticated request"
            );
            req.extensions_mut().insert(PrincipalContext::new(principal));
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(error = %err, "bearer token rejected");
            errors::gateway_error_to_response(GatewayError::Unauthenticated)
        }
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(axum::http::header::AUTHORIZATION)?;
    let token = header.to_str().ok()?.strip_prefix("Bearer ")?.trim();

    if token.is_empty() { None } else { Some(token) }
}
