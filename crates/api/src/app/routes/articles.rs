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
    Router::new().route("/:id", patch(update_article))
}

pub async fn update_article(
    Extension(services): Extension<Arc<GatewayServices>>,
    Extension(principal): Extension<crate::context::PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateArticleRequest>,
) -> axum::response::Response {
    let id = match ResourceId::parse(id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let payload = match body.into_payload() {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let action = OwnedAction::UpdateArticle;

    match gateway::execute_update(&services, principal.principal(), action, id, payload).await {
        Ok(envelope) => (StatusCode::OK, Json(envelope)).into_response(),
        Err(e) => errors::gateway_error_to_response(e),
    }
}
