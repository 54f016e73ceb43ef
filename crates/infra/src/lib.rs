//! Infrastructure: session-scoped state storage.

pub mod session_store;

pub use session_store::{InMemorySessionStore, SessionStore};
