use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::patch,
};

use pressgate_core::{OwnedAction, ResourceId};

use crate::app::{dto, errors};
use crate::gateway::{self, GatewayServices};

pub fn router() -> Router {
    Router::new().route("/:id", patch(update_comment))
}

pub async fn update_comment(
    Extension(services): Extension<Arc<GatewayServices>>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateCommentRequest>,
) -> axum::response::Response {
    let id = match ResourceId::parse(id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let payload = match body.into_payload() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let action = OwnedAction::UpdateComment;

    match gateway::execute_update(&services, principal.principal(), action, id, payload).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
