//! Matching Engine: scores every (engineer, position) pair by per-skill attainment.
//!
//! Default: `LevelRatioScorer` (exact integer arithmetic, deterministic, total).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; handlers never call the scoring
//! functions directly. Runs are O(E × P × S) and recompute from scratch; nothing
//! is cached between calls, so cost grows quadratically with population size.

use std::time::Instant;

use tracing::info;

use crate::models::{Engineer, MatchResult, MatchedSkill, Position, Skill};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Pluggable pair scorer. Implementations must be pure: same inputs, same result.
pub trait MatchScorer: Send + Sync {
    /// Short label surfaced in API responses.
    fn backend(&self) -> &'static str;

    fn score_pair(&self, engineer: &Engineer, position: &Position) -> MatchResult;

    /// Cross product in insertion order: outer loop engineers, inner loop positions.
    fn calculate_matches(&self, engineers: &[Engineer], positions: &[Position]) -> Vec<MatchResult> {
        let started = Instant::now();
        let mut results = Vec::with_capacity(engineers.len() * positions.len());

        for engineer in engineers {
            for position in positions {
                results.push(self.score_pair(engineer, position));
            }
        }

        info!(
            backend = self.backend(),
            engineers = engineers.len(),
            positions = positions.len(),
            results = results.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Matching run complete"
        );
        results
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LevelRatioScorer default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Scores each required skill as `min(held / required, 1) × 100` and averages
/// over all required skills, missing ones counting as 0.
///
/// Rounding: half away from zero (scores are never negative, so this is the
/// same as rounding .5 up). The average is computed in exact integer arithmetic
/// so half-integer boundaries such as 62.5 always round to 63.
pub struct LevelRatioScorer;

impl MatchScorer for LevelRatioScorer {
    fn backend(&self) -> &'static str {
        "level_ratio"
    }

    fn score_pair(&self, engineer: &Engineer, position: &Position) -> MatchResult {
        calculate_match(engineer, position)
    }
}

/// Scores the full cross product with the default scorer.
pub fn calculate_matches(engineers: &[Engineer], positions: &[Position]) -> Vec<MatchResult> {
    LevelRatioScorer.calculate_matches(engineers, positions)
}

// ────────────────────────────────────────────────────────────────────────────
// Core pair algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Every level is in 1..=5, so each per-skill ratio is a whole number of 60ths.
const LEVEL_LCM: u32 = 60;

pub fn calculate_match(engineer: &Engineer, position: &Position) -> MatchResult {
    let mut matched_skills = Vec::new();
    let mut missing_skills: Vec<Skill> = Vec::new();

    for required in &position.required_skills {
        match engineer.skill(&required.name) {
            Some(held) => matched_skills.push(MatchedSkill {
                name: required.name.clone(),
                engineer_level: held.level,
                required_level: required.level,
            }),
            None => missing_skills.push(required.clone()),
        }
    }

    let score = final_score(&matched_skills, position.required_skills.len());

    MatchResult {
        engineer_id: engineer.id.clone(),
        position_id: position.id.clone(),
        score,
        matched_skills,
        missing_skills,
    }
}

fn final_score(matched: &[MatchedSkill], required_count: usize) -> u8 {
    if required_count == 0 {
        return 0;
    }

    // Σ contribution, in units of 1/60 of a percentage point.
    let total: u64 = matched.iter().map(contribution_sixtieths).sum();
    let denominator = u64::from(LEVEL_LCM) * required_count as u64;

    // round(total / denominator), half away from zero.
    let rounded = (2 * total + denominator) / (2 * denominator);
    rounded.min(100) as u8
}

fn contribution_sixtieths(skill: &MatchedSkill) -> u64 {
    let required = u32::from(skill.required_level.get());
    let held = u32::from(skill.engineer_level.get()).min(required);
    u64::from(held * 100 * LEVEL_LCM / required)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillLevel;
    use proptest::prelude::*;

    fn skill(name: &str, level: u8) -> Skill {
        Skill::new(name, SkillLevel::try_from(level).unwrap()).unwrap()
    }

    fn engineer(id: &str, skills: &[(&str, u8)]) -> Engineer {
        Engineer {
            id: id.to_string(),
            name: format!("Engineer {id}"),
            years_of_experience: 3,
            skills: skills.iter().map(|(n, l)| skill(n, *l)).collect(),
        }
    }

    fn position(id: &str, required: &[(&str, u8)]) -> Position {
        Position {
            id: id.to_string(),
            title: format!("Position {id}"),
            department: "Platform".to_string(),
            required_skills: required.iter().map(|(n, l)| skill(n, *l)).collect(),
        }
    }

    #[test]
    fn test_mixed_example_scores_67() {
        let e = engineer("e1", &[("JS", 4), ("TS", 4), ("Node", 3)]);
        let p = position("p1", &[("JS", 4), ("TS", 3), ("React", 4)]);

        let result = calculate_match(&e, &p);
        assert_eq!(result.score, 67);
        assert_eq!(result.matched_skills.len(), 2);
        assert_eq!(result.matched_skills[0].name, "JS");
        assert_eq!(result.matched_skills[0].engineer_level.get(), 4);
        assert_eq!(result.matched_skills[0].required_level.get(), 4);
        assert_eq!(result.matched_skills[1].name, "TS");
        assert_eq!(result.matched_skills[1].engineer_level.get(), 4);
        assert_eq!(result.matched_skills[1].required_level.get(), 3);
        assert_eq!(result.missing_skills, vec![skill("React", 4)]);
    }

    #[test]
    fn test_proportional_shortfall_scores_50() {
        let e = engineer("e1", &[("JavaScript", 2)]);
        let p = position("p1", &[("JavaScript", 4)]);
        assert_eq!(calculate_match(&e, &p).score, 50);
    }

    #[test]
    fn test_half_integer_average_rounds_up() {
        // (100 + 25) / 2 = 62.5
        let e = engineer("e1", &[("A", 4), ("B", 1)]);
        let p = position("p1", &[("A", 4), ("B", 4)]);
        assert_eq!(calculate_match(&e, &p).score, 63);
    }

    #[test]
    fn test_exceeding_every_requirement_scores_100() {
        let e = engineer("e1", &[("Rust", 5), ("SQL", 3), ("Docker", 2)]);
        let p = position("p1", &[("Rust", 4), ("SQL", 3), ("Docker", 2)]);
        let result = calculate_match(&e, &p);
        assert_eq!(result.score, 100);
        assert!(result.missing_skills.is_empty());
        assert!(result.matched_skills.iter().all(MatchedSkill::meets_requirement));
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let e = engineer("e1", &[("Rust", 5)]);
        let p = position("p1", &[]);
        let result = calculate_match(&e, &p);
        assert_eq!(result.score, 0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_skill_names_are_case_sensitive() {
        let e = engineer("e1", &[("rust", 5)]);
        let p = position("p1", &[("Rust", 3)]);
        let result = calculate_match(&e, &p);
        assert_eq!(result.score, 0);
        assert_eq!(result.missing_skills.len(), 1);
    }

    #[test]
    fn test_thirds_round_correctly() {
        // 1/3 of requirements fully met → 33.33 → 33
        let e = engineer("e1", &[("A", 3)]);
        let p = position("p1", &[("A", 3), ("B", 3), ("C", 3)]);
        assert_eq!(calculate_match(&e, &p).score, 33);

        // 2/3 of requirements met → 66.67 → 67
        let e = engineer("e2", &[("A", 3), ("B", 3)]);
        assert_eq!(calculate_match(&e, &p).score, 67);
    }

    #[test]
    fn test_cross_product_order_and_count() {
        let engineers = vec![engineer("e1", &[("A", 1)]), engineer("e2", &[("A", 5)])];
        let positions = vec![
            position("p1", &[("A", 2)]),
            position("p2", &[("B", 2)]),
            position("p3", &[("A", 5)]),
        ];

        let results = calculate_matches(&engineers, &positions);
        assert_eq!(results.len(), 6);
        let order: Vec<(&str, &str)> = results
            .iter()
            .map(|r| (r.engineer_id.as_str(), r.position_id.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("e1", "p1"),
                ("e1", "p2"),
                ("e1", "p3"),
                ("e2", "p1"),
                ("e2", "p2"),
                ("e2", "p3"),
            ]
        );
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let engineers = vec![engineer("e1", &[("A", 3), ("B", 2)])];
        let positions = vec![position("p1", &[("A", 4), ("B", 2), ("C", 1)])];
        assert_eq!(
            calculate_matches(&engineers, &positions),
            calculate_matches(&engineers, &positions)
        );
    }

    #[test]
    fn test_empty_inputs_yield_no_results() {
        assert!(calculate_matches(&[], &[position("p1", &[("A", 2)])]).is_empty());
        assert!(calculate_matches(&[engineer("e1", &[("A", 2)])], &[]).is_empty());
    }

    #[test]
    fn test_contribution_in_sixtieths() {
        let m = MatchedSkill {
            name: "A".to_string(),
            engineer_level: SkillLevel::try_from(2).unwrap(),
            required_level: SkillLevel::try_from(5).unwrap(),
        };
        assert_eq!(contribution_sixtieths(&m), 40 * 60);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(LevelRatioScorer.backend(), "level_ratio");
    }

    fn arb_skills(max: usize) -> impl Strategy<Value = Vec<(usize, u8)>> {
        prop::collection::vec((0usize..8, 1u8..=5), 0..max)
    }

    fn named(skills: Vec<(usize, u8)>) -> Vec<Skill> {
        skills
            .into_iter()
            .map(|(i, l)| skill(&format!("S{i}"), l))
            .collect()
    }

    proptest! {
        #[test]
        fn prop_score_bounded_and_skills_partitioned(
            held in arb_skills(8),
            required in arb_skills(8),
        ) {
            let e = Engineer {
                id: "e".to_string(),
                name: "E".to_string(),
                years_of_experience: 1,
                skills: named(held),
            };
            let p = Position {
                id: "p".to_string(),
                title: "P".to_string(),
                department: "D".to_string(),
                required_skills: named(required),
            };

            let result = calculate_match(&e, &p);
            prop_assert!(result.score <= 100);
            prop_assert_eq!(
                result.matched_skills.len() + result.missing_skills.len(),
                p.required_skills.len()
            );

            let expected = if p.required_skills.is_empty() {
                0.0
            } else {
                let sum: f64 = result.matched_skills.iter().map(MatchedSkill::contribution).sum();
                sum / p.required_skills.len() as f64
            };
            prop_assert!((f64::from(result.score) - expected).abs() <= 0.5 + 1e-9);
        }
    }
}
