// In-memory registry of engineers and positions, and the latest match run.
// Entries are append-only: there is no update or delete.

pub mod handlers;

use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::mock::generator::MockGenerator;
use crate::models::skill::dedup_last_write_wins;
use crate::models::{Engineer, MatchResult, Position, Skill};

pub struct Directory {
    pub engineers: Vec<Engineer>,
    pub positions: Vec<Position>,
    /// Output of the most recent matching run, replaced wholesale on each run.
    pub results: Vec<MatchResult>,
    pub generator: MockGenerator,
}

impl Directory {
    pub fn new(engineers: Vec<Engineer>, positions: Vec<Position>, generator: MockGenerator) -> Self {
        Self {
            engineers,
            positions,
            results: Vec::new(),
            generator,
        }
    }

    pub fn empty(generator: MockGenerator) -> Self {
        Self::new(Vec::new(), Vec::new(), generator)
    }
}

/// Manual engineer submission. The id is assigned on insertion.
#[derive(Debug, Deserialize)]
pub struct NewEngineer {
    pub name: String,
    pub years_of_experience: u32,
    pub skills: Vec<Skill>,
}

/// Manual position submission. The id is assigned on insertion.
#[derive(Debug, Deserialize)]
pub struct NewPosition {
    pub title: String,
    pub department: String,
    pub required_skills: Vec<Skill>,
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

fn required_text(value: &str, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn required_skills(skills: Vec<Skill>, field: &str) -> Result<Vec<Skill>, AppError> {
    let skills = dedup_last_write_wins(skills);
    if skills.is_empty() {
        return Err(AppError::Validation(format!("{field} must contain at least one skill")));
    }
    Ok(skills)
}

impl NewEngineer {
    pub fn into_engineer(self) -> Result<Engineer, AppError> {
        Ok(Engineer {
            id: fresh_id(),
            name: required_text(&self.name, "name")?,
            years_of_experience: self.years_of_experience,
            skills: required_skills(self.skills, "skills")?,
        })
    }
}

impl NewPosition {
    pub fn into_position(self) -> Result<Position, AppError> {
        Ok(Position {
            id: fresh_id(),
            title: required_text(&self.title, "title")?,
            department: required_text(&self.department, "department")?,
            required_skills: required_skills(self.required_skills, "required_skills")?,
        })
    }
}
