//! Connection between two participants.

use serde::{Deserialize, Serialize};

use super::ParticipantId;

/// Lifecycle state of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    Requested,
    Pending,
    Accepted,
    Rejected,
}

/// A connection record. The engine reads these only to exclude candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Participant who initiated the request.
    pub a: ParticipantId,
    pub b: ParticipantId,
    pub status: ConnectionStatus,
}

impl Connection {
    pub fn new(a: ParticipantId, b: ParticipantId, status: ConnectionStatus) -> Self {
        Self { a, b, status }
    }

    /// Whether the connection joins `x` and `y`, in either direction.
    pub fn joins(&self, x: ParticipantId, y: ParticipantId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// The "other" end of the connection from the given participant.
    pub fn other(&self, from: ParticipantId) -> Option<ParticipantId> {
        if from == self.a { Some(self.b) }
        else if from == self.b { Some(self.a) }
        else { None }
    }
}
