//! In-memory profile store.
//!
//! This is the reference implementation of `ProfileStore`.
//! It uses simple HashMaps protected by RwLock.
//!
//! ## Limitations
//!
//! - **No snapshot reads**: each trait call takes its own read lock, so a
//!   writer interleaving with a recommendation request can be observed
//!   half-way. Fine for tests and single-writer embedding.
//! - **Linear scans**: connection lookups walk every connection record.
//!
//! Use this store for:
//! - Testing the filter, scorer and ranking end to end
//! - Embedding the engine where profile data is already in memory

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use hashbrown::HashSet;
use parking_lot::RwLock;

use crate::model::*;
use crate::{Error, Result};
use super::ProfileStore;

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory participant, bio and connection storage.
///
/// Cloning is cheap and clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    participants: RwLock<HashMap<ParticipantId, Participant>>,
    /// Insertion order, which is the enumeration order of event scans.
    order: RwLock<Vec<ParticipantId>>,
    event_bios: RwLock<HashMap<(ParticipantId, EventId), EventBio>>,
    skill_bios: RwLock<HashMap<ParticipantId, SkillBios>>,
    connections: RwLock<Vec<Connection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Write helpers (the engine itself never calls these)
    // ========================================================================

    /// Insert or replace a participant. Replacing keeps its enumeration slot.
    pub fn insert_participant(&self, participant: Participant) {
        let id = participant.id;
        let previous = self.inner.participants.write().insert(id, participant);
        if previous.is_none() {
            self.inner.order.write().push(id);
        }
    }

    pub fn set_active_event(&self, id: ParticipantId, event: Option<EventId>) -> Result<()> {
        let mut participants = self.inner.participants.write();
        let p = participants.get_mut(&id).ok_or_else(|| Error::NotFound(format!("Participant {id}")))?;
        p.active_event = event;
        Ok(())
    }

    pub fn set_profile_complete(&self, id: ParticipantId, complete: bool) -> Result<()> {
        let mut participants = self.inner.participants.write();
        let p = participants.get_mut(&id).ok_or_else(|| Error::NotFound(format!("Participant {id}")))?;
        p.profile_complete = complete;
        Ok(())
    }

    /// Store the participant's bio for `bio.event`, replacing any earlier one.
    pub fn put_event_bio(&self, id: ParticipantId, bio: EventBio) -> Result<()> {
        self.ensure_participant(id)?;
        self.inner.event_bios.write().insert((id, bio.event), bio);
        Ok(())
    }

    /// Append a skill bio. Earlier bios keep their position.
    pub fn add_skill_bio(&self, id: ParticipantId, bio: SkillBio) -> Result<()> {
        self.ensure_participant(id)?;
        self.inner.skill_bios.write().entry(id).or_default().push(bio);
        Ok(())
    }

    /// Record the connection between `a` and `b`.
    ///
    /// There is one record per unordered pair; an existing record has its
    /// status overwritten and keeps its original direction.
    pub fn connect(&self, a: ParticipantId, b: ParticipantId, status: ConnectionStatus) -> Result<()> {
        if a == b {
            return Err(Error::ConstraintViolation(format!("Participant {a} cannot connect to itself")));
        }
        self.ensure_participant(a)?;
        self.ensure_participant(b)?;

        let mut conns = self.inner.connections.write();
        match conns.iter_mut().find(|c| c.joins(a, b)) {
            Some(existing) => existing.status = status,
            None => conns.push(Connection::new(a, b, status)),
        }
        Ok(())
    }

    fn ensure_participant(&self, id: ParticipantId) -> Result<()> {
        if self.inner.participants.read().contains_key(&id) {
            Ok(())
        } else {
            Err(Error::NotFound(format!("Participant {id}")))
        }
    }

    fn connections_with_status(&self, id: ParticipantId, status: ConnectionStatus) -> HashSet<ParticipantId> {
        self.inner
            .connections
            .read()
            .iter()
            .filter(|c| c.status == status)
            .filter_map(|c| c.other(id))
            .collect()
    }
}

// ============================================================================
// ProfileStore impl
// ============================================================================

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_participant(&self, id: ParticipantId) -> Result<Option<Participant>> {
        Ok(self.inner.participants.read().get(&id).cloned())
    }

    async fn find_active_event_participants(&self, event: EventId) -> Result<Vec<Participant>> {
        let order = self.inner.order.read();
        let participants = self.inner.participants.read();
        Ok(order
            .iter()
            .filter_map(|id| participants.get(id))
            .filter(|p| p.active_event == Some(event))
            .cloned()
            .collect())
    }

    async fn find_event_bio(
        &self,
        participant: ParticipantId,
        event: EventId,
    ) -> Result<Option<EventBio>> {
        Ok(self.inner.event_bios.read().get(&(participant, event)).cloned())
    }

    async fn find_skill_bios(&self, participant: ParticipantId) -> Result<SkillBios> {
        Ok(self.inner.skill_bios.read().get(&participant).cloned().unwrap_or_default())
    }

    async fn find_accepted_connections(&self, participant: ParticipantId) -> Result<HashSet<ParticipantId>> {
        Ok(self.connections_with_status(participant, ConnectionStatus::Accepted))
    }

    async fn find_rejected_connections(&self, participant: ParticipantId) -> Result<HashSet<ParticipantId>> {
        Ok(self.connections_with_status(participant, ConnectionStatus::Rejected))
    }
}

// ============================================================================
// Tests
// ============================================================================
