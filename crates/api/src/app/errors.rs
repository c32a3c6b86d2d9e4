use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pressgate_core::DomainError;

use crate::gateway::GatewayError;

/// Map a dispatch outcome to its HTTP shape. One place, no downgrades.
pub fn gateway_error_to_response(err: GatewayError) -> axum::response::Response {
    match err {
        GatewayError::Unauthenticated => {
            json_error(StatusCode::UNAUTHORIZED, "unauthenticated", "missing or invalid credentials")
        }
        GatewayError::Denied => json_error(StatusCode::FORBIDDEN, "forbidden", "forbidden"),
        GatewayError::ResourceNotFound => {
            json_error(StatusCode::NOT_FOUND, "not_found", "resource not found")
        }
        GatewayError::UpstreamUnavailable(reason) => {
            json_error(StatusCode::BAD_GATEWAY, "upstream_unavailable", reason)
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
