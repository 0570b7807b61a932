//! # Compatibility Tables
//!
//! Designed lookup data behind the scorer: pairwise commitment and
//! motivation scores plus the role→skill dictionary. None of it is
//! computed; product tuning swaps the table, not the scoring code.
//!
//! ```text
//! tables.json ──from_json_path()──► CompatibilityTables ──Arc──► Scorer
//! ```

use std::path::Path;

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use crate::model::{CommitmentLevel, Motivation};
use crate::{Error, Result};

/// Lowest and highest value any matrix cell may hold.
pub const CELL_MIN: u8 = 1;
pub const CELL_MAX: u8 = 3;

const COMMITMENT_MATRIX: [[u8; 3]; 3] = [
    // Casual Moderate Intense
    [3, 2, 1], // Casual
    [2, 3, 2], // Moderate
    [1, 2, 3], // Intense
];

const MOTIVATION_MATRIX: [[u8; 5]; 5] = [
    // Learn Achieve Social Career Innovation
    [3, 2, 3, 2, 3], // Learning
    [2, 3, 1, 3, 2], // Achievement
    [3, 1, 3, 2, 2], // Social
    [2, 3, 2, 3, 2], // Career
    [3, 2, 2, 2, 3], // Innovation
];

const ROLE_SKILLS: &[(&str, &[&str])] = &[
    ("Frontend Developer", &[
        "HTML", "CSS", "JavaScript", "React", "Vue", "Angular",
        "Bootstrap", "Tailwind CSS", "Responsive design", "Git",
    ]),
    ("Backend Developer", &[
        "Python", "Java", "Node.js", "Express", "Flask", "Django",
        "REST API", "SQL", "MongoDB", "Firebase", "Git", "JSON",
    ]),
    ("Fullstack Developer", &[
        "JavaScript", "Python", "React", "Node.js", "HTML", "CSS",
        "SQL", "MongoDB", "Git", "API integration", "Database design",
    ]),
    ("UI/UX Designer", &[
        "Figma", "Adobe XD", "Sketch", "Wireframing", "Prototyping",
        "User research", "Design thinking", "Color theory", "Typography",
        "Accessibility", "Canva",
    ]),
    ("Product Manager", &[
        "Project planning", "Agile", "Scrum", "User stories",
        "Market research", "Communication", "Time management",
        "Documentation", "Notion", "Trello", "Problem solving",
    ]),
    ("Data Analyst", &[
        "Python", "R", "SQL", "Excel", "Data visualization",
        "Pandas", "NumPy", "Matplotlib", "Tableau", "Power BI",
        "Statistics", "Data cleaning", "Jupyter Notebooks",
    ]),
    ("Pitcher/Presenter", &[
        "Public speaking", "Presentation design", "Storytelling",
        "PowerPoint", "Canva", "Market research", "Communication",
        "Demo preparation", "Q&A handling", "Business model basics",
    ]),
];

/// Immutable scoring tables, shared by reference into the scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityTables {
    /// Indexed by `CommitmentLevel::ordinal()` on both axes.
    pub commitment: [[u8; 3]; 3],
    /// Indexed by `Motivation::ordinal()` on both axes.
    pub motivation: [[u8; 5]; 5],
    /// Role name → skill tags required by that role.
    pub role_skills: HashMap<String, HashSet<String>>,
}

impl Default for CompatibilityTables {
    fn default() -> Self {
        let role_skills: HashMap<String, HashSet<String>> = ROLE_SKILLS
            .iter()
            .map(|(role, skills)| {
                let tags: HashSet<String> = skills.iter().map(|s| s.to_string()).collect();
                (role.to_string(), tags)
            })
            .collect();

        Self {
            commitment: COMMITMENT_MATRIX,
            motivation: MOTIVATION_MATRIX,
            role_skills,
        }
    }
}

impl CompatibilityTables {
    /// Parse and validate a table from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load and validate a table file, typically once at startup.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let tables = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            roles = tables.role_skills.len(),
            "loaded compatibility tables"
        );
        Ok(tables)
    }

    /// Check that both matrices are symmetric and every cell is in range.
    pub fn validate(&self) -> Result<()> {
        check_matrix("commitment", &self.commitment)?;
        check_matrix("motivation", &self.motivation)?;
        if let Some(role) = self.role_skills.keys().find(|r| r.trim().is_empty()) {
            return Err(Error::InvalidTables(format!("blank role name {role:?}")));
        }
        Ok(())
    }

    pub fn commitment_score(&self, a: CommitmentLevel, b: CommitmentLevel) -> u32 {
        self.commitment[a.ordinal()][b.ordinal()] as u32
    }

    pub fn motivation_score(&self, a: Motivation, b: Motivation) -> u32 {
        self.motivation[a.ordinal()][b.ordinal()] as u32
    }

    /// Skill tags for a role. Unknown roles have none.
    pub fn skills_for(&self, role: &str) -> Option<&HashSet<String>> {
        self.role_skills.get(role)
    }

    /// Number of skill tags two roles have in common.
    pub fn shared_skill_count(&self, role_a: &str, role_b: &str) -> usize {
        match (self.skills_for(role_a), self.skills_for(role_b)) {
            (Some(a), Some(b)) => a.intersection(b).count(),
            _ => 0,
        }
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.role_skills.keys().map(String::as_str)
    }
}

fn check_matrix<const N: usize>(name: &str, m: &[[u8; N]; N]) -> Result<()> {
    for i in 0..N {
        for j in 0..N {
            let cell = m[i][j];
            if !(CELL_MIN..=CELL_MAX).contains(&cell) {
                return Err(Error::InvalidTables(format!(
                    "{name}[{i}][{j}] = {cell}, expected {CELL_MIN}..={CELL_MAX}"
                )));
            }
            if cell != m[j][i] {
                return Err(Error::InvalidTables(format!(
                    "{name} matrix is not symmetric at ({i}, {j})"
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CommitmentLevel::*;
    use crate::model::Motivation::*;

    #[test]
    fn test_default_tables_are_valid() {
        CompatibilityTables::default().validate().unwrap();
    }

    #[test]
    fn test_commitment_values() {
        let t = CompatibilityTables::default();
        assert_eq!(t.commitment_score(Casual, Casual), 3);
        assert_eq!(t.commitment_score(Casual, Moderate), 2);
        assert_eq!(t.commitment_score(Casual, Intense), 1);
        assert_eq!(t.commitment_score(Moderate, Moderate), 3);
        assert_eq!(t.commitment_score(Moderate, Intense), 2);
        assert_eq!(t.commitment_score(Intense, Intense), 3);
    }

    #[test]
    fn test_motivation_values() {
        let t = CompatibilityTables::default();
        assert_eq!(t.motivation_score(Learning, Social), 3);
        assert_eq!(t.motivation_score(Learning, Innovation), 3);
        assert_eq!(t.motivation_score(Achievement, Social), 1);
        assert_eq!(t.motivation_score(Achievement, Career), 3);
        assert_eq!(t.motivation_score(Social, Innovation), 2);
        for &m in Motivation::ALL {
            assert_eq!(t.motivation_score(m, m), 3);
        }
    }

    #[test]
    fn test_role_dictionary() {
        let t = CompatibilityTables::default();
        assert_eq!(t.roles().count(), 7);
        assert_eq!(t.skills_for("Frontend Developer").unwrap().len(), 10);
        assert_eq!(t.skills_for("Backend Developer").unwrap().len(), 12);
        assert_eq!(t.skills_for("Data Analyst").unwrap().len(), 13);
        assert!(t.skills_for("Astronaut").is_none());
    }

    #[test]
    fn test_shared_skills() {
        let t = CompatibilityTables::default();
        assert_eq!(t.shared_skill_count("Frontend Developer", "Data Analyst"), 0);
        assert_eq!(t.shared_skill_count("Frontend Developer", "Frontend Developer"), 10);
        // Python, SQL
        assert_eq!(t.shared_skill_count("Backend Developer", "Data Analyst"), 2);
        assert_eq!(t.shared_skill_count("Frontend Developer", "Astronaut"), 0);
    }

    #[test]
    fn test_json_round_trip_through_loader() {
        let json = serde_json::to_string(&CompatibilityTables::default()).unwrap();
        let loaded = CompatibilityTables::from_json_str(&json).unwrap();
        assert_eq!(loaded, CompatibilityTables::default());
    }

    #[test]
    fn test_rejects_asymmetric_matrix() {
        let mut t = CompatibilityTables::default();
        t.commitment[0][2] = 2;
        let err = t.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidTables(msg) if msg.contains("symmetric")));
    }

    #[test]
    fn test_rejects_out_of_range_cell() {
        let mut t = CompatibilityTables::default();
        t.motivation[1][1] = 0;
        assert!(matches!(t.validate(), Err(Error::InvalidTables(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = CompatibilityTables::from_json_str("{\"commitment\": []}").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
