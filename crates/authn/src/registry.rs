//! Concurrency-safe registry of active realms.
//!
//! Registration/unregistration is rare; resolution is the hot path. Mutations
//! rebuild an immutable sorted backing array under a write lock, and
//! `snapshot` hands out a cheap `Arc` clone of it under the read lock, so a
//! snapshot can never observe a partially applied mutation.

use std::cmp::Reverse;
use std::sync::{Arc, PoisonError, RwLock};

use trustgate_core::ConfigError;

use crate::realm::Realm;

struct RealmEntry {
    realm: Arc<dyn Realm>,
    /// Captured at registration so snapshot order stays deterministic.
    priority: i32,
    /// Registration sequence; breaks priority ties (stable ordering).
    seq: u64,
}

/// Immutable, priority-ordered view of the registry taken at one instant.
///
/// Once produced, a snapshot never changes, even while the live registry
/// mutates concurrently.
#[derive(Clone)]
pub struct RealmSnapshot {
    realms: Arc<[Arc<dyn Realm>]>,
}

impl RealmSnapshot {
    pub fn len(&self) -> usize {
        self.realms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.realms.is_empty()
    }

    /// Realms in evaluation order: descending priority, registration order
    /// on ties.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Realm>> {
        self.realms.iter()
    }
}

struct Inner {
    entries: Vec<RealmEntry>,
    sorted: Arc<[Arc<dyn Realm>]>,
    next_seq: u64,
}

impl Inner {
    fn rebuild(&mut self) {
        let mut ordered: Vec<&RealmEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|e| (Reverse(e.priority), e.seq));
        self.sorted = ordered.into_iter().map(|e| Arc::clone(&e.realm)).collect();
    }
}

/// Live collection of registered realms.
///
/// Realms are registered/unregistered by an external lifecycle manager; the
/// engine only ever borrows snapshots. Entries are *not* deduplicated by
/// name — multiple realms sharing a name are each consulted.
pub struct RealmRegistry {
    inner: RwLock<Inner>,
}

impl RealmRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a realm to the live set.
    ///
    /// Fails fast if the realm's name is empty. Future snapshots include the
    /// realm; snapshots already handed out are unaffected.
    pub fn register(&self, realm: Arc<dyn Realm>) -> Result<(), ConfigError> {
        if realm.name().is_empty() {
            return Err(ConfigError::EmptyRealmName);
        }

        let mut inner = self.write();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        let priority = realm.priority();
        inner.entries.push(RealmEntry {
            realm,
            priority,
            seq,
        });
        inner.rebuild();
        Ok(())
    }

    /// Remove a realm by identity (pointer equality), not by name.
    ///
    /// No-op if the realm was never registered.
    pub fn unregister(&self, realm: &Arc<dyn Realm>) {
        let mut inner = self.write();
        let before = inner.entries.len();
        inner.entries.retain(|e| !Arc::ptr_eq(&e.realm, realm));
        if inner.entries.len() != before {
            inner.rebuild();
        }
    }

    /// Take an immutable, priority-sorted view of the current realm set.
    pub fn snapshot(&self) -> RealmSnapshot {
        RealmSnapshot {
            realms: Arc::clone(&self.read().sorted),
        }
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    // No user code runs under the lock, so poisoning is unreachable in
    // practice; recover the guard rather than panic.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RealmRegistry {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: Vec::new(),
                sorted: Vec::new().into(),
                next_seq: 0,
            }),
        }
    }
}

impl core::fmt::Debug for RealmRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.read();
        let names: Vec<&str> = inner.sorted.iter().map(|r| r.name()).collect();
        f.debug_struct("RealmRegistry").field("realms", &names).finish()
    }
}
