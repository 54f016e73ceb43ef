use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::services::AppServices;
use crate::context::SessionContext;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Session introspection: the caller's id and how much it holds.
pub async fn session(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "session_id": session.session_id().to_string(),
        "fresh": session.is_fresh(),
        "item_count": services.item_count(session.session_id()),
    }))
}

/// End the session: its inventory is discarded server-side. The browser may
/// keep the cookie; the next request starts over with an empty inventory
/// under the same id.
pub async fn end_session(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> StatusCode {
    services.end_session(session.session_id());
    StatusCode::NO_CONTENT
}
