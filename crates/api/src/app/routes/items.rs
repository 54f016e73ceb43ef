use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Json, Router,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(add_item))
        .route("/:position", delete(remove_item))
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    match services.add_item(session.session_id(), &body.name, body.quantity) {
        Ok((position, item)) => (
            StatusCode::CREATED,
            Json(dto::ItemResponse::new(position, &item)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    let rows = services.list_items(session.session_id());
    (StatusCode::OK, Json(dto::InventoryResponse::new(rows))).into_response()
}

pub async fn remove_item(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(position): Path<usize>,
) -> axum::response::Response {
    match services.remove_item(session.session_id(), position) {
        Ok(item) => (
            StatusCode::OK,
            Json(dto::ItemResponse::new(position, &item)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
