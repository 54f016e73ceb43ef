//! HTTP application wiring (axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: session store wiring and the operations handlers call
//! - `routes/`: HTTP routes + handlers (one file per surface area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    let session_state = middleware::SessionState {
        services: services.clone(),
    };

    // Session-scoped routes: everything except liveness.
    let session_scoped = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            session_state,
            middleware::session_middleware,
        ));

    Router::new()
        .route("/healthz", get(routes::system::health))
        .merge(session_scoped)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
