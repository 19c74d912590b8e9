use std::cell::Cell;

use shared::{KeyValueStore, SimulationSnapshot, SnapshotStore};

use super::logging::Logger;
use super::storage::BrowserStorage;

const COMPONENT: &str = "persistence";

/// Handed out when a save is scheduled; `clear` invalidates every
/// outstanding ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveTicket(u64);

/// Saves and restores the simulator form.
///
/// Nothing here fails observably: storage and parse problems are logged and
/// the caller sees a no-op or an absent snapshot.
pub struct SimulationPersistence<S> {
    store: SnapshotStore<S>,
    generation: Cell<u64>,
}

impl SimulationPersistence<BrowserStorage> {
    pub fn browser(key: &str) -> Self {
        Self::new(BrowserStorage, key)
    }
}

impl<S: KeyValueStore> SimulationPersistence<S> {
    pub fn new(backend: S, key: &str) -> Self {
        Self {
            store: SnapshotStore::new(backend, key),
            generation: Cell::new(0),
        }
    }

    /// Reserve a save to run later with [`save_pending`](Self::save_pending).
    pub fn pending_save(&self) -> SaveTicket {
        SaveTicket(self.generation.get())
    }

    /// Save unless `clear` ran since the ticket was handed out.
    pub fn save_pending(&self, ticket: SaveTicket, snapshot: &SimulationSnapshot) {
        if ticket != self.pending_save() {
            Logger::debug_with_component(COMPONENT, "Skipping save cancelled by clear");
            return;
        }
        self.save(snapshot);
    }

    pub fn save(&self, snapshot: &SimulationSnapshot) {
        if let Err(e) = self.store.try_save(snapshot) {
            Logger::warn_with_component(COMPONENT, &format!("Could not save simulation: {}", e));
        }
    }

    pub fn load(&self) -> Option<SimulationSnapshot> {
        match self.store.try_load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                Logger::error_with_component(COMPONENT, &format!("Error while restoring simulation: {}", e));
                None
            }
        }
    }

    pub fn clear(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        if let Err(e) = self.store.try_clear() {
            Logger::warn_with_component(COMPONENT, &format!("Could not clear simulation: {}", e));
        }
    }
}
