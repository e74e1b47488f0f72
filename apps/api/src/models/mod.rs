pub mod entities;
pub mod match_result;
pub mod skill;

pub use entities::{Engineer, Position};
pub use match_result::{MatchResult, MatchedSkill};
pub use skill::{Skill, SkillLevel};
