use serde::{Deserialize, Serialize};

use crate::models::skill::Skill;

/// A candidate profile. Ids are assigned by whoever inserts the engineer into a
/// collection (form, import batch or generator), never by the submitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Engineer {
    pub id: String,
    pub name: String,
    pub years_of_experience: u32,
    pub skills: Vec<Skill>,
}

/// A job opening with the skills it requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub title: String,
    pub department: String,
    pub required_skills: Vec<Skill>,
}

impl Engineer {
    /// First skill with an exactly matching (case-sensitive) name.
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn has_skill(&self, name: &str) -> bool {
        self.skill(name).is_some()
    }
}

impl Position {
    pub fn requires(&self, name: &str) -> bool {
        self.required_skills.iter().any(|s| s.name == name)
    }
}
