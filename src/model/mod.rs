//! # Participant Model
//!
//! Read-only value objects the engine consumes from its collaborators.
//! Profile storage, event management and connection requests own these;
//! the engine only reads them for the duration of one request.
//!
//! Design rule: no storage types, no I/O, no async here.

pub mod participant;
pub mod bio;
pub mod connection;

pub use participant::{Participant, ParticipantId, EventId};
pub use bio::{
    EventBio, SkillBio, SkillBios, RoleSet,
    CommitmentLevel, Motivation, SkillLevel, ParseEnumError,
};
pub use connection::{Connection, ConnectionStatus};
