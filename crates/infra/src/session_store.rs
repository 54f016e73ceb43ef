//! Session-isolated inventory storage.
//!
//! Each session owns exactly one [`Inventory`]. Entries are created on first
//! access and discarded when the session ends (explicitly or by idle expiry).
//! Timestamps are passed in by the caller; prefer fixed values in tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};

use stockroom_core::SessionId;
use stockroom_inventory::Inventory;

/// Session-isolated store of inventories.
pub trait SessionStore: Send + Sync {
    /// Snapshot of the session's inventory, if the session has one.
    fn inventory(&self, session_id: SessionId) -> Option<Inventory>;

    /// Store the session's inventory, creating the entry if needed and
    /// refreshing its last-seen time.
    fn put(&self, session_id: SessionId, inventory: Inventory, now: DateTime<Utc>);

    /// Mark the session as seen, creating an empty entry on first access.
    fn touch(&self, session_id: SessionId, now: DateTime<Utc>);

    /// Discard the session and everything it owns.
    fn end_session(&self, session_id: SessionId);

    /// Drop sessions idle for longer than `max_idle`; returns how many were
    /// dropped.
    fn purge_idle(&self, now: DateTime<Utc>, max_idle: Duration) -> usize;

    /// Number of live sessions.
    fn session_count(&self) -> usize;
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore + ?Sized,
{
    fn inventory(&self, session_id: SessionId) -> Option<Inventory> {
        (**self).inventory(session_id)
    }

    fn put(&self, session_id: SessionId, inventory: Inventory, now: DateTime<Utc>) {
        (**self).put(session_id, inventory, now)
    }

    fn touch(&self, session_id: SessionId, now: DateTime<Utc>) {
        (**self).touch(session_id, now)
    }

    fn end_session(&self, session_id: SessionId) {
        (**self).end_session(session_id)
    }

    fn purge_idle(&self, now: DateTime<Utc>, max_idle: Duration) -> usize {
        (**self).purge_idle(now, max_idle)
    }

    fn session_count(&self) -> usize {
        (**self).session_count()
    }
}

#[derive(Debug, Clone)]
struct SessionEntry {
    inventory: Inventory,
    created_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

impl SessionEntry {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            inventory: Inventory::new(),
            created_at: now,
            last_seen_at: now,
        }
    }
}

/// In-memory session store (the only backing this system has: state lives for
/// the process lifetime at most).
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    inner: RwLock<HashMap<SessionId, SessionEntry>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the session was created, if it exists.
    pub fn created_at(&self, session_id: SessionId) -> Option<DateTime<Utc>> {
        let map = self.inner.read().ok()?;
        map.get(&session_id).map(|entry| entry.created_at)
    }
}

impl SessionStore for InMemorySessionStore {
    fn inventory(&self, session_id: SessionId) -> Option<Inventory> {
        let map = self.inner.read().ok()?;
        map.get(&session_id).map(|entry| entry.inventory.clone())
    }

    fn put(&self, session_id: SessionId, inventory: Inventory, now: DateTime<Utc>) {
        if let Ok(mut map) = self.inner.write() {
            let entry = map.entry(session_id).or_insert_with(|| SessionEntry::new(now));
            entry.inventory = inventory;
            entry.last_seen_at = now;
        }
    }

    fn touch(&self, session_id: SessionId, now: DateTime<Utc>) {
        if let Ok(mut map) = self.inner.write() {
            let entry = map.entry(session_id).or_insert_with(|| SessionEntry::new(now));
            entry.last_seen_at = now;
        }
    }

    fn end_session(&self, session_id: SessionId) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(&session_id);
        }
    }

    fn purge_idle(&self, now: DateTime<Utc>, max_idle: Duration) -> usize {
        let mut map = match self.inner.write() {
            Ok(m) => m,
            Err(_) => return 0,
        };

        let before = map.len();
        map.retain(|_id, entry| now.signed_duration_since(entry.last_seen_at) <= max_idle);
        before - map.len()
    }

    fn session_count(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }
}
