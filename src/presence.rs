//! Online presence registry.
//!
//! Tracks which participants are currently connected. Chat and profile
//! views use it; the recommendation engine never consults it.

use hashbrown::HashSet;
use parking_lot::RwLock;

use crate::model::ParticipantId;

/// Concurrency-safe set of online participant IDs.
#[derive(Debug, Default)]
pub struct PresenceRegistry {
    online: RwLock<HashSet<ParticipantId>>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a participant online. Returns false if it already was.
    pub fn set_online(&self, id: ParticipantId) -> bool {
        let inserted = self.online.write().insert(id);
        if inserted {
            tracing::trace!(participant = %id, "online");
        }
        inserted
    }

    /// Mark a participant offline. Returns false if it was not online.
    pub fn set_offline(&self, id: ParticipantId) -> bool {
        let removed = self.online.write().remove(&id);
        if removed {
            tracing::trace!(participant = %id, "offline");
        }
        removed
    }

    pub fn is_online(&self, id: ParticipantId) -> bool {
        self.online.read().contains(&id)
    }

    pub fn online_count(&self) -> usize {
        self.online.read().len()
    }

    /// Online IDs, sorted ascending.
    pub fn snapshot(&self) -> Vec<ParticipantId> {
        let mut ids: Vec<_> = self.online.read().iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
