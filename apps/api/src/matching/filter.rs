//! Presentation-side helpers: entity search, run selection, and result views.
//!
//! The engine emits every pair unsorted; everything that narrows or orders the
//! output lives here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Engineer, MatchResult, Position};

/// Keyword + skill search over engineers.
#[derive(Debug, Clone, Default)]
pub struct EngineerQuery {
    pub keyword: Option<String>,
    pub skills: Vec<String>,
}

/// Keyword + skill search over positions. The keyword matches title or department.
#[derive(Debug, Clone, Default)]
pub struct PositionQuery {
    pub keyword: Option<String>,
    pub skills: Vec<String>,
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn active_keyword(keyword: &Option<String>) -> Option<&str> {
    keyword.as_deref().map(str::trim).filter(|k| !k.is_empty())
}

impl EngineerQuery {
    pub fn matches(&self, engineer: &Engineer) -> bool {
        let keyword_ok = active_keyword(&self.keyword)
            .map(|k| contains_ci(&engineer.name, k))
            .unwrap_or(true);
        keyword_ok && self.skills.iter().all(|s| engineer.has_skill(s))
    }

    pub fn apply<'a>(&self, engineers: &'a [Engineer]) -> Vec<&'a Engineer> {
        engineers.iter().filter(|e| self.matches(e)).collect()
    }
}

impl PositionQuery {
    pub fn matches(&self, position: &Position) -> bool {
        let keyword_ok = active_keyword(&self.keyword)
            .map(|k| contains_ci(&position.title, k) || contains_ci(&position.department, k))
            .unwrap_or(true);
        keyword_ok && self.skills.iter().all(|s| position.requires(s))
    }

    pub fn apply<'a>(&self, positions: &'a [Position]) -> Vec<&'a Position> {
        positions.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Which entities take part in a matching run. An empty id list selects everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Selection {
    #[serde(default)]
    pub engineer_ids: Vec<String>,
    #[serde(default)]
    pub position_ids: Vec<String>,
}

impl Selection {
    /// Clones the selected entities out of the collections, preserving collection order.
    pub fn resolve(&self, engineers: &[Engineer], positions: &[Position]) -> (Vec<Engineer>, Vec<Position>) {
        let engineers = engineers
            .iter()
            .filter(|e| self.engineer_ids.is_empty() || self.engineer_ids.contains(&e.id))
            .cloned()
            .collect();
        let positions = positions
            .iter()
            .filter(|p| self.position_ids.is_empty() || self.position_ids.contains(&p.id))
            .cloned()
            .collect();
        (engineers, positions)
    }
}

/// View options over a stored result set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultQuery {
    pub position_id: Option<String>,
    pub min_score: Option<u8>,
    pub limit: Option<usize>,
}

/// A result joined with the display fields of the entities it references.
#[derive(Debug, Clone, Serialize)]
pub struct PresentedMatch {
    pub engineer_name: String,
    pub years_of_experience: u32,
    pub position_title: String,
    pub department: String,
    /// Matched skills held at or above the required level.
    pub requirements_met: usize,
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Filters, sorts by score (descending, stable), and resolves ids.
/// Results whose engineer or position no longer exists are dropped.
pub fn present(
    results: &[MatchResult],
    engineers: &[Engineer],
    positions: &[Position],
    query: &ResultQuery,
) -> Vec<PresentedMatch> {
    let mut selected: Vec<&MatchResult> = results
        .iter()
        .filter(|r| query.position_id.as_ref().map_or(true, |id| &r.position_id == id))
        .filter(|r| query.min_score.map_or(true, |min| r.score >= min))
        .collect();
    selected.sort_by(|a, b| b.score.cmp(&a.score));

    // First entry wins on duplicate ids.
    let mut engineers_by_id: HashMap<&str, &Engineer> = HashMap::with_capacity(engineers.len());
    for engineer in engineers {
        engineers_by_id.entry(engineer.id.as_str()).or_insert(engineer);
    }
    let mut positions_by_id: HashMap<&str, &Position> = HashMap::with_capacity(positions.len());
    for position in positions {
        positions_by_id.entry(position.id.as_str()).or_insert(position);
    }

    let presented = selected.into_iter().filter_map(|r| {
        let engineer = engineers_by_id.get(r.engineer_id.as_str())?;
        let position = positions_by_id.get(r.position_id.as_str())?;
        Some(PresentedMatch {
            engineer_name: engineer.name.clone(),
            years_of_experience: engineer.years_of_experience,
            position_title: position.title.clone(),
            department: position.department.clone(),
            requirements_met: r.matched_skills.iter().filter(|m| m.meets_requirement()).count(),
            result: r.clone(),
        })
    });

    match query.limit {
        Some(limit) => presented.take(limit).collect(),
        None => presented.collect(),
    }
}
