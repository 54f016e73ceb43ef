use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use stockroom_core::SessionId;

use crate::app::services::AppServices;
use crate::context::SessionContext;

pub const SESSION_COOKIE: &str = "stockroom_session";

#[derive(Clone)]
pub struct SessionState {
    pub services: Arc<AppServices>,
}

/// Resolve the request's session: reuse the cookie's id when present and
/// parseable, mint a fresh one otherwise. Fresh sessions get a `Set-Cookie`
/// on the way out; every request refreshes the session's idle clock.
pub async fn session_middleware(
    State(state): State<SessionState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let (session_id, fresh) = match session_id_from_headers(req.headers()) {
        Some(id) => (id, false),
        None => {
            let id = SessionId::new();
            tracing::debug!(session = %id, "minted fresh session");
            (id, true)
        }
    };

    state.services.touch(session_id);
    req.extensions_mut()
        .insert(SessionContext::new(session_id, fresh));

    let mut res = next.run(req).await;

    if fresh {
        if let Ok(value) = HeaderValue::from_str(&format!(
            "{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax"
        )) {
            res.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    res
}

fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name != SESSION_COOKIE {
            return None;
        }
        value.trim().parse().ok()
    })
}
