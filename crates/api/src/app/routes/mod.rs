use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod items;
pub mod pages;
pub mod system;

/// Router for all session-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/items/add", post(pages::add_item))
        .route("/items/remove", post(pages::remove_item))
        .route("/session", get(system::session))
        .route("/api/session", delete(system::end_session))
        .nest("/api/items", items::router())
}
