//! Event-scoped and general skill bios.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::EventId;

// ============================================================================
// Enumerations
// ============================================================================

/// Error returned when a stored enum name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Generates the ordinal/name plumbing shared by the bio enums.
///
/// Variant order is significant: ordinals index the compatibility matrices.
macro_rules! ordinal_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn ordinal(self) -> usize {
                self as usize
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| ParseEnumError { kind: $kind, value: s.to_string() })
            }
        }
    };
}

ordinal_enum! {
    /// How much time and energy a participant plans to put into the event.
    CommitmentLevel, "commitment level" {
        Casual => "CASUAL",
        Moderate => "MODERATE",
        Intense => "INTENSE",
    }
}

ordinal_enum! {
    /// Why the participant is attending.
    Motivation, "motivation" {
        Learning => "LEARNING",
        Achievement => "ACHIEVEMENT",
        Social => "SOCIAL",
        Career => "CAREER",
        Innovation => "INNOVATION",
    }
}

ordinal_enum! {
    /// Proficiency in the role named by a skill bio.
    SkillLevel, "skill level" {
        Beginner => "BEGINNER",
        Intermediate => "INTERMEDIATE",
        Advanced => "ADVANCED",
    }
}

impl SkillLevel {
    /// Distance between two levels on the ordinal scale.
    pub fn distance(self, other: SkillLevel) -> usize {
        self.ordinal().abs_diff(other.ordinal())
    }
}

// ============================================================================
// RoleSet
// ============================================================================

/// Set of role names parsed from a free-text, comma-separated list.
///
/// Names are trimmed and empty entries dropped, so `"Designer, PM"`,
/// `"PM,Designer"` and `" PM , Designer "` are the same set. Absent input is
/// the empty set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<String>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map(Self::parse).unwrap_or_default()
    }

    pub fn contains(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for RoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(Into::into)
                .map(|r: String| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect(),
        )
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        f.write_str(&joined.join(", "))
    }
}

// ============================================================================
// Bios
// ============================================================================

/// A participant's profile for one event. At most one per (participant, event).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBio {
    pub event: EventId,
    pub motivation: Motivation,
    pub commitment: CommitmentLevel,
    /// Roles this participant fills.
    pub roles_offered: RoleSet,
    /// Roles this participant is looking for.
    pub roles_sought: RoleSet,
}

impl EventBio {
    pub fn new(event: EventId, motivation: Motivation, commitment: CommitmentLevel) -> Self {
        Self {
            event,
            motivation,
            commitment,
            roles_offered: RoleSet::new(),
            roles_sought: RoleSet::new(),
        }
    }

    pub fn with_roles_offered(mut self, raw: &str) -> Self {
        self.roles_offered = RoleSet::parse(raw);
        self
    }

    pub fn with_roles_sought(mut self, raw: &str) -> Self {
        self.roles_sought = RoleSet::parse(raw);
        self
    }
}

/// General (not event-scoped) skill declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBio {
    /// Role name, looked up in the role→skill dictionary.
    pub role: String,
    pub level: SkillLevel,
}

impl SkillBio {
    pub fn new(role: impl Into<String>, level: SkillLevel) -> Self {
        Self { role: role.into(), level }
    }
}

/// Skill bios of one participant, in store order.
pub type SkillBios = SmallVec<[SkillBio; 2]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_set_parse() {
        let a = RoleSet::parse("Frontend Developer, Product Manager");
        let b = RoleSet::parse("Product Manager,Frontend Developer");
        let c = RoleSet::parse("  Product Manager ,  Frontend Developer ,");
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.len(), 2);
        assert!(a.contains("Product Manager"));
    }

    #[test]
    fn test_role_set_empty_input() {
        assert!(RoleSet::parse("").is_empty());
        assert!(RoleSet::parse(" , ,").is_empty());
        assert!(RoleSet::from_optional(None).is_empty());
        assert_eq!(RoleSet::from_optional(None), RoleSet::parse(""));
    }

    #[test]
    fn test_role_set_display() {
        let roles: RoleSet = ["B", "A"].into_iter().collect();
        assert_eq!(roles.to_string(), "A, B");
    }

    #[test]
    fn test_enum_ordinals() {
        assert_eq!(CommitmentLevel::Casual.ordinal(), 0);
        assert_eq!(CommitmentLevel::Intense.ordinal(), 2);
        assert_eq!(Motivation::Innovation.ordinal(), 4);
        assert_eq!(SkillLevel::Beginner.distance(SkillLevel::Advanced), 2);
        assert_eq!(SkillLevel::Advanced.distance(SkillLevel::Intermediate), 1);
    }

    #[test]
    fn test_enum_from_str() {
        assert_eq!("casual".parse::<CommitmentLevel>(), Ok(CommitmentLevel::Casual));
        assert_eq!(" CAREER ".parse::<Motivation>(), Ok(Motivation::Career));
        let err = "expert".parse::<SkillLevel>().unwrap_err();
        assert_eq!(err.kind, "skill level");
        assert_eq!(err.to_string(), "unknown skill level 'expert'");
    }

    #[test]
    fn test_enum_serde_names() {
        let json = serde_json::to_string(&Motivation::Achievement).unwrap();
        assert_eq!(json, "\"ACHIEVEMENT\"");
        let level: SkillLevel = serde_json::from_str("\"INTERMEDIATE\"").unwrap();
        assert_eq!(level, SkillLevel::Intermediate);
    }
}
