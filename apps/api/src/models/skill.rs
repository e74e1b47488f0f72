use serde::{Deserialize, Serialize};

/// Proficiency on the 1–5 scale shared by engineers and positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const MIN: SkillLevel = SkillLevel(1);
    pub const MAX: SkillLevel = SkillLevel(5);
    /// Level assumed when imported text omits one.
    pub const DEFAULT: SkillLevel = SkillLevel(3);

    /// Clamps any integer into the valid range.
    pub fn saturating(value: i64) -> Self {
        SkillLevel(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Ok(SkillLevel(value))
        } else {
            Err(format!("skill level must be between 1 and 5, got {value}"))
        }
    }
}

impl From<SkillLevel> for u8 {
    fn from(level: SkillLevel) -> Self {
        level.0
    }
}

/// A named competency. Names are case-sensitive identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSkill")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Deserialize)]
struct RawSkill {
    name: String,
    level: SkillLevel,
}

impl TryFrom<RawSkill> for Skill {
    type Error = String;

    fn try_from(raw: RawSkill) -> Result<Self, Self::Error> {
        Skill::new(raw.name, raw.level).ok_or_else(|| "skill name cannot be empty".to_string())
    }
}

impl Skill {
    /// Returns `None` when the trimmed name is empty.
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Option<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Skill {
            name: trimmed.to_string(),
            level,
        })
    }
}

/// Collapses duplicate names, keeping the position of the first occurrence and
/// the level of the last one.
pub fn dedup_last_write_wins(skills: Vec<Skill>) -> Vec<Skill> {
    let mut out: Vec<Skill> = Vec::with_capacity(skills.len());
    for skill in skills {
        match out.iter_mut().find(|s| s.name == skill.name) {
            Some(existing) => existing.level = skill.level,
            None => out.push(skill),
        }
    }
    out
}
