use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post},
};

use pressgate_core::ResourceId;

use crate::app::{dto, errors};
use crate::gateway::{self, GatewayServices};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_tag))
        .route("/:id", delete(delete_tag))
}

pub async fn create_tag(
    Extension(services): Extension<Arc<GatewayServices>>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Json(body): Json<dto::CreateTagRequest>,
) -> axum::response::Response {
    let payload = match body.into_payload() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match gateway::execute_create_tag(&services, principal.principal(), payload).await {
        Ok(envelope) => (StatusCode::CREATED, Json(envelope)).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}

pub async fn delete_tag(
    Extension(services): Extension<Arc<GatewayServices>>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match ResourceId::parse(id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match gateway::execute_delete_tag(&services, principal.principal(), id).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
