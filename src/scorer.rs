//! # Pairwise Compatibility Scorer
//!
//! Scores one pair of participants at the same event.
//!
//! ```text
//! same event? ─► both event bios? ─► both skill bios? ─► furry match? ─► role overlap?
//!     │               │                   │                  │               │
//!     └───────────────┴──── Ineligible(gate) ────────────────┴───────────────┘
//!                                                                     │ pass
//!                                       commitment + motivation + skill = 3..=9
//! ```
//!
//! Gates run in that order and the first failure wins. Ineligibility is a
//! value, never an error: partially onboarded candidates are common.

use std::fmt;
use std::sync::Arc;

use crate::model::*;
use crate::storage::ProfileStore;
use crate::tables::CompatibilityTables;
use crate::Result;

/// Skill score when the two roles share no skill tags.
pub const SKILL_COMPLEMENTARY: u32 = 3;
/// Skill score for overlapping roles at comparable levels.
pub const SKILL_OVERLAP_PEER: u32 = 2;
/// Skill score for overlapping roles with a wide level gap.
pub const SKILL_OVERLAP_MISMATCHED: u32 = 1;
/// Widest level gap still counted as comparable.
pub const MAX_PEER_LEVEL_GAP: usize = 1;

// ============================================================================
// MatchProfile
// ============================================================================

/// Everything the scorer looks at for one side of a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchProfile {
    pub participant: Participant,
    /// Bio for the participant's active event, if written.
    pub event_bio: Option<EventBio>,
    pub skill_bios: SkillBios,
}

impl MatchProfile {
    pub fn new(participant: Participant) -> Self {
        Self { participant, event_bio: None, skill_bios: SkillBios::new() }
    }

    pub fn with_event_bio(mut self, bio: EventBio) -> Self {
        self.event_bio = Some(bio);
        self
    }

    pub fn with_skill_bio(mut self, bio: SkillBio) -> Self {
        self.skill_bios.push(bio);
        self
    }

    /// Load the profile as seen from `event`.
    ///
    /// Lookups stop as soon as a later gate is bound to fail: nothing is
    /// fetched for a participant at another event, and skill bios are not
    /// fetched without an event bio.
    pub async fn load<S: ProfileStore>(store: &S, participant: Participant, event: EventId) -> Result<Self> {
        let mut profile = Self::new(participant);
        if profile.participant.active_event != Some(event) {
            return Ok(profile);
        }
        profile.event_bio = store.find_event_bio(profile.participant.id, event).await?;
        if profile.event_bio.is_some() {
            profile.skill_bios = store.find_skill_bios(profile.participant.id).await?;
        }
        Ok(profile)
    }

    /// The skill bio used for scoring. Only the first one counts.
    pub fn primary_skill(&self) -> Option<&SkillBio> {
        self.skill_bios.first()
    }

    pub fn id(&self) -> ParticipantId {
        self.participant.id
    }
}

// ============================================================================
// Verdict
// ============================================================================

/// Sub-scores of an eligible pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub commitment: u32,
    pub motivation: u32,
    pub skill: u32,
}

impl Score {
    pub fn total(&self) -> u32 {
        self.commitment + self.motivation + self.skill
    }
}

/// The gate that excluded a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ineligibility {
    DifferentEvent,
    MissingEventBio,
    MissingSkillBio,
    FurryMismatch,
    /// One side offers exactly the roles the other is looking for.
    RoleOverlap,
}

impl Ineligibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Ineligibility::DifferentEvent => "different_event",
            Ineligibility::MissingEventBio => "missing_event_bio",
            Ineligibility::MissingSkillBio => "missing_skill_bio",
            Ineligibility::FurryMismatch => "furry_mismatch",
            Ineligibility::RoleOverlap => "role_overlap",
        }
    }
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Compatible(Score),
    Ineligible(Ineligibility),
}

impl Verdict {
    /// Summed score, or 0 for an ineligible pair. 0 is a sentinel, not a
    /// low score.
    pub fn total(&self) -> u32 {
        match self {
            Verdict::Compatible(s) => s.total(),
            Verdict::Ineligible(_) => 0,
        }
    }

    pub fn is_compatible(&self) -> bool {
        matches!(self, Verdict::Compatible(_))
    }

    pub fn score(&self) -> Option<Score> {
        match self {
            Verdict::Compatible(s) => Some(*s),
            Verdict::Ineligible(_) => None,
        }
    }
}

// ============================================================================
// Scorer
// ============================================================================

/// Rule-based pair scorer over an injected, immutable table.
#[derive(Debug, Clone)]
pub struct Scorer {
    tables: Arc<CompatibilityTables>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(Arc::new(CompatibilityTables::default()))
    }
}

impl Scorer {
    pub fn new(tables: Arc<CompatibilityTables>) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &CompatibilityTables {
        &self.tables
    }

    /// Score `requester` against `candidate`.
    pub fn score(&self, requester: &MatchProfile, candidate: &MatchProfile) -> Verdict {
        let (a, b) = (&requester.participant, &candidate.participant);
        if a.active_event.is_none() || a.active_event != b.active_event {
            return Verdict::Ineligible(Ineligibility::DifferentEvent);
        }

        let (Some(bio_a), Some(bio_b)) = (&requester.event_bio, &candidate.event_bio) else {
            return Verdict::Ineligible(Ineligibility::MissingEventBio);
        };

        let (Some(skill_a), Some(skill_b)) = (requester.primary_skill(), candidate.primary_skill()) else {
            return Verdict::Ineligible(Ineligibility::MissingSkillBio);
        };

        if a.furry != b.furry {
            return Verdict::Ineligible(Ineligibility::FurryMismatch);
        }

        if roles_conflict(bio_a, bio_b) {
            return Verdict::Ineligible(Ineligibility::RoleOverlap);
        }

        Verdict::Compatible(Score {
            commitment: self.tables.commitment_score(bio_a.commitment, bio_b.commitment),
            motivation: self.tables.motivation_score(bio_a.motivation, bio_b.motivation),
            skill: self.skill_score(skill_a, skill_b),
        })
    }

    /// Complementarity of two skill bios.
    ///
    /// Disjoint skill sets fill different needs and score highest. Shared
    /// skills only help when proficiency is comparable.
    pub fn skill_score(&self, a: &SkillBio, b: &SkillBio) -> u32 {
        if self.tables.shared_skill_count(&a.role, &b.role) == 0 {
            SKILL_COMPLEMENTARY
        } else if a.level.distance(b.level) <= MAX_PEER_LEVEL_GAP {
            SKILL_OVERLAP_PEER
        } else {
            SKILL_OVERLAP_MISMATCHED
        }
    }
}

/// True when either side already offers exactly the set of roles the other
/// is looking for. Exact set equality, not overlap.
pub fn roles_conflict(a: &EventBio, b: &EventBio) -> bool {
    a.roles_offered == b.roles_sought || b.roles_offered == a.roles_sought
}
