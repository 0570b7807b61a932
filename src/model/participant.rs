//! Participant in an event.

use serde::{Deserialize, Serialize};

/// Opaque participant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered participant as seen by the matching engine.
///
/// Event bios and skill bios are looked up separately through the store,
/// so only the flags the gates need live here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    /// Furry preference. Pairs must agree on it exactly.
    pub furry: bool,
    pub profile_complete: bool,
    /// At most one event per participant is active for matching.
    pub active_event: Option<EventId>,
}

impl Participant {
    pub fn new(id: ParticipantId) -> Self {
        Self {
            id,
            furry: false,
            profile_complete: false,
            active_event: None,
        }
    }

    pub fn with_furry(mut self, furry: bool) -> Self {
        self.furry = furry;
        self
    }

    pub fn with_profile_complete(mut self, complete: bool) -> Self {
        self.profile_complete = complete;
        self
    }

    pub fn with_active_event(mut self, event: impl Into<Option<EventId>>) -> Self {
        self.active_event = event.into();
        self
    }
}
