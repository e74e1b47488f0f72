use serde::{Deserialize, Serialize};

use crate::models::skill::{Skill, SkillLevel};

/// A required skill the engineer holds, with both levels for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub name: String,
    pub engineer_level: SkillLevel,
    pub required_level: SkillLevel,
}

impl MatchedSkill {
    pub fn meets_requirement(&self) -> bool {
        self.engineer_level >= self.required_level
    }
}

/// Compatibility of one engineer with one position. Recomputed on every run.
///
/// The ids are not checked against any collection; consumers skip results whose
/// ids no longer resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub engineer_id: String,
    pub position_id: String,
    pub score: u8,
    pub matched_skills: Vec<MatchedSkill>,
    pub missing_skills: Vec<Skill>,
}
