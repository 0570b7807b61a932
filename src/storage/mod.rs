//! # Profile Store Trait
//!
//! This is THE contract between the matching engine and the systems that own
//! participant data. Profile CRUD, event management and connection requests
//! live elsewhere; the engine only needs these six reads.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory for testing/embedding |
//!
//! Consistency across the reads of one request (e.g. tying them to a single
//! database transaction) is the store's business, not the engine's.

pub mod memory;

use async_trait::async_trait;
use hashbrown::HashSet;

use crate::model::*;
use crate::Result;

pub use memory::MemoryStore;

/// The read-only collaborator contract.
///
/// "Absent" is always `Ok(None)` or an empty collection. `Err` is reserved
/// for faults in the store itself (`Error::Storage`).
#[async_trait]
pub trait ProfileStore: Send + Sync + 'static {
    /// Look up a participant by ID.
    async fn find_participant(&self, id: ParticipantId) -> Result<Option<Participant>>;

    /// All participants whose active event is `event`, in the store's
    /// enumeration order.
    async fn find_active_event_participants(&self, event: EventId) -> Result<Vec<Participant>>;

    /// The participant's bio for one event, if they wrote one.
    async fn find_event_bio(
        &self,
        participant: ParticipantId,
        event: EventId,
    ) -> Result<Option<EventBio>>;

    /// General skill bios, in the order they were created. Possibly empty.
    async fn find_skill_bios(&self, participant: ParticipantId) -> Result<SkillBios>;

    /// IDs of participants with an accepted connection to `participant`,
    /// in either direction.
    async fn find_accepted_connections(&self, participant: ParticipantId) -> Result<HashSet<ParticipantId>>;

    /// IDs of participants with a rejected connection to `participant`,
    /// in either direction.
    async fn find_rejected_connections(&self, participant: ParticipantId) -> Result<HashSet<ParticipantId>>;
}
