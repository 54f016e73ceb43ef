//! Per-request context types.

use stockroom_core::SessionId;

/// Session context for a request.
///
/// Inserted by the session middleware; present for all session-scoped routes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session_id: SessionId,
    fresh: bool,
}

impl SessionContext {
    pub fn new(session_id: SessionId, fresh: bool) -> Self {
        Self { session_id, fresh }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Whether the id was minted for this request (no usable cookie came in).
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }
}
