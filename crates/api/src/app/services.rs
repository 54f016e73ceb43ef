//! Service layer between the HTTP handlers and the domain.

use std::sync::Arc;

use chrono::{Duration, Utc};

use stockroom_core::{DomainResult, SessionId};
use stockroom_infra::{InMemorySessionStore, SessionStore};
use stockroom_inventory::{InventoryItem, InventoryRow};

/// Shared application services handed to every handler.
///
/// Each operation runs to completion per user interaction: load the session's
/// inventory, apply one domain operation, store the result back. Failed
/// operations never store anything.
pub struct AppServices {
    store: Arc<dyn SessionStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Default in-memory wiring used by `main` and the black-box tests.
    pub fn build() -> Self {
        Self::new(Arc::new(InMemorySessionStore::new()))
    }

    /// Refresh the session's idle clock (creates the session on first access).
    pub fn touch(&self, session_id: SessionId) {
        self.store.touch(session_id, Utc::now());
    }

    /// Add an item to the session's inventory; returns its 1-based position
    /// and the stored record.
    pub fn add_item(
        &self,
        session_id: SessionId,
        name: &str,
        quantity: i64,
    ) -> DomainResult<(usize, InventoryItem)> {
        let mut inventory = self.store.inventory(session_id).unwrap_or_default();
        let (position, item) = inventory.add(name, quantity)?;
        self.store.put(session_id, inventory, Utc::now());

        tracing::info!(session = %session_id, position, "item added");
        Ok((position, item))
    }

    /// Remove the item at a 1-based position from the session's inventory.
    pub fn remove_item(
        &self,
        session_id: SessionId,
        position: usize,
    ) -> DomainResult<InventoryItem> {
        let mut inventory = self.store.inventory(session_id).unwrap_or_default();
        let removed = inventory.remove(position)?;
        self.store.put(session_id, inventory, Utc::now());

        tracing::info!(session = %session_id, position, "item removed");
        Ok(removed)
    }

    /// Current display rows for the session.
    pub fn list_items(&self, session_id: SessionId) -> Vec<InventoryRow> {
        self.store
            .inventory(session_id)
            .unwrap_or_default()
            .rows()
    }

    pub fn item_count(&self, session_id: SessionId) -> usize {
        self.store
            .inventory(session_id)
            .map(|inventory| inventory.len())
            .unwrap_or(0)
    }

    /// Discard the session and its inventory.
    pub fn end_session(&self, session_id: SessionId) {
        self.store.end_session(session_id);
    }

    pub fn purge_idle_sessions(&self, max_idle: Duration) -> usize {
        self.store.purge_idle(Utc::now(), max_idle)
    }

    pub fn session_count(&self) -> usize {
        self.store.session_count()
    }
}
