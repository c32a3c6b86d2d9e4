use axum::{Router, routing::get};

pub mod articles;
pub mod comments;
pub mod system;
pub mod tags;

/// Router for all authenticated endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/whoami", get(system::whoami))
        .nest("/articles", articles::router())
        .nest("/comments", comments::router())
        .nest("/tags", tags::router())
}
