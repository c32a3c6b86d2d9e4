use axum::{Json, http::StatusCode, response::IntoResponse};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn whoami(
    axum::extract::Extension(principal): axum::extract::Extension<crate::context::PrincipalContext>,
) -> impl IntoResponse {
    let principal = principal.principal();
    Json(serde_json::json!({
        "principal_id": principal.id.to_string(),
        "role": principal.role.as_str(),
    }))
}
