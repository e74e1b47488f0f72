//! Skill Text Parser: turns an imported skills cell into a list of `Skill`s.
//!
//! Two shapes are accepted:
//! 1. A JSON array of `{name, level}` objects, tried when the text starts with `[`.
//! 2. Comma-separated `name:level` pairs, e.g. `JavaScript:4,TypeScript:3`.
//!
//! The parser never fails. Problems degrade to an empty or partial list and
//! are reported as `ParseDiagnostic`s for the caller to surface.

use serde::Serialize;
use tracing::warn;

use crate::models::{Skill, SkillLevel};

/// Which decode attempt produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillShape {
    Empty,
    Structured,
    Delimited,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseDiagnostic {
    /// The bracketed input was not a valid skill array; nothing was kept.
    StructuredDecode { message: String },
    /// A comma-separated token had no name and was dropped.
    EmptyToken { index: usize },
    /// A level had no leading integer; the default level was used.
    InvalidLevel { name: String, raw: String },
    /// Text after the leading integer (e.g. `4.5`, `4pt`) was dropped.
    TrailingTextIgnored { name: String, raw: String, level: SkillLevel },
    /// A numeric level fell outside 1..=5 and was clamped.
    LevelClamped { name: String, raw: i64, level: SkillLevel },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillParse {
    pub shape: SkillShape,
    pub skills: Vec<Skill>,
    pub diagnostics: Vec<ParseDiagnostic>,
}

/// Parses a skills cell, discarding diagnostics (they are still logged).
/// Duplicate names are kept; de-duplication is the caller's decision.
pub fn parse_skill_list(raw: &str) -> Vec<Skill> {
    parse_skill_list_detailed(raw).skills
}

pub fn parse_skill_list_detailed(raw: &str) -> SkillParse {
    let trimmed = raw.trim();

    let parsed = if trimmed.is_empty() {
        SkillParse {
            shape: SkillShape::Empty,
            skills: Vec::new(),
            diagnostics: Vec::new(),
        }
    } else if trimmed.starts_with('[') {
        parse_structured(trimmed)
    } else {
        parse_delimited(trimmed)
    };

    for diagnostic in &parsed.diagnostics {
        warn!(?diagnostic, "Skill list parse issue");
    }
    parsed
}

fn parse_structured(text: &str) -> SkillParse {
    match serde_json::from_str::<Vec<Skill>>(text) {
        Ok(skills) => SkillParse {
            shape: SkillShape::Structured,
            skills,
            diagnostics: Vec::new(),
        },
        Err(e) => SkillParse {
            shape: SkillShape::Structured,
            skills: Vec::new(),
            diagnostics: vec![ParseDiagnostic::StructuredDecode {
                message: e.to_string(),
            }],
        },
    }
}

fn parse_delimited(text: &str) -> SkillParse {
    let mut skills = Vec::new();
    let mut diagnostics = Vec::new();

    for (index, token) in text.split(',').enumerate() {
        let (name, level_text) = match token.split_once(':') {
            Some((name, level)) => (name.trim(), level.trim()),
            None => (token.trim(), ""),
        };

        if name.is_empty() {
            diagnostics.push(ParseDiagnostic::EmptyToken { index });
            continue;
        }

        let level = parse_level(name, level_text, &mut diagnostics);
        if let Some(skill) = Skill::new(name, level) {
            skills.push(skill);
        }
    }

    SkillParse {
        shape: SkillShape::Delimited,
        skills,
        diagnostics,
    }
}

fn parse_level(name: &str, text: &str, diagnostics: &mut Vec<ParseDiagnostic>) -> SkillLevel {
    if text.is_empty() {
        return SkillLevel::DEFAULT;
    }

    let Some((value, has_trailing)) = leading_integer(text) else {
        diagnostics.push(ParseDiagnostic::InvalidLevel {
            name: name.to_string(),
            raw: text.to_string(),
        });
        return SkillLevel::DEFAULT;
    };

    let level = SkillLevel::saturating(value);
    if has_trailing {
        diagnostics.push(ParseDiagnostic::TrailingTextIgnored {
            name: name.to_string(),
            raw: text.to_string(),
            level,
        });
    }
    if i64::from(level.get()) != value {
        diagnostics.push(ParseDiagnostic::LevelClamped {
            name: name.to_string(),
            raw: value,
            level,
        });
    }
    level
}

/// Optional sign followed by ASCII digits at the start of `text`, and whether
/// anything comes after them. `None` when there is no leading digit.
fn leading_integer(text: &str) -> Option<(i64, bool)> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }

    let magnitude = digits[..len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    let value = if negative { -magnitude } else { magnitude };
    Some((value, len < digits.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(skills: &[Skill]) -> Vec<(&str, u8)> {
        skills.iter().map(|s| (s.name.as_str(), s.level.get())).collect()
    }

    #[test]
    fn test_delimited_pairs() {
        let skills = parse_skill_list("A:5,B:2");
        assert_eq!(pairs(&skills), vec![("A", 5), ("B", 2)]);
    }

    #[test]
    fn test_name_without_level_defaults_to_3() {
        assert_eq!(pairs(&parse_skill_list("A")), vec![("A", 3)]);
        assert_eq!(pairs(&parse_skill_list("A:")), vec![("A", 3)]);
    }

    #[test]
    fn test_empty_input_is_empty() {
        let parsed = parse_skill_list_detailed("");
        assert_eq!(parsed.shape, SkillShape::Empty);
        assert!(parsed.skills.is_empty());
        assert!(parsed.diagnostics.is_empty());
        assert!(parse_skill_list("   ").is_empty());
    }

    #[test]
    fn test_whitespace_is_stripped() {
        let skills = parse_skill_list("  Vue.js : 4 ,  Node.js:2  ");
        assert_eq!(pairs(&skills), vec![("Vue.js", 4), ("Node.js", 2)]);
    }

    #[test]
    fn test_non_numeric_level_defaults_with_diagnostic() {
        let parsed = parse_skill_list_detailed("Go:expert");
        assert_eq!(pairs(&parsed.skills), vec![("Go", 3)]);
        assert_eq!(
            parsed.diagnostics,
            vec![ParseDiagnostic::InvalidLevel {
                name: "Go".to_string(),
                raw: "expert".to_string(),
            }]
        );
    }

    #[test]
    fn test_out_of_range_level_is_clamped() {
        let parsed = parse_skill_list_detailed("Go:9,Rust:0");
        assert_eq!(pairs(&parsed.skills), vec![("Go", 5), ("Rust", 1)]);
        assert_eq!(parsed.diagnostics.len(), 2);
    }

    #[test]
    fn test_split_on_first_colon_only() {
        // "C:4:x" → name "C", level text "4:x" → leading 4
        let parsed = parse_skill_list_detailed("C:4:x");
        assert_eq!(pairs(&parsed.skills), vec![("C", 4)]);
        assert_eq!(parsed.diagnostics.len(), 1);
    }

    #[test]
    fn test_level_reads_leading_integer() {
        for raw in ["A:4.5", "A:4pt"] {
            let parsed = parse_skill_list_detailed(raw);
            assert_eq!(pairs(&parsed.skills), vec![("A", 4)], "{raw}");
            assert!(
                matches!(
                    parsed.diagnostics[..],
                    [ParseDiagnostic::TrailingTextIgnored { .. }]
                ),
                "{raw}"
            );
        }
        assert_eq!(pairs(&parse_skill_list("A:+2")), vec![("A", 2)]);
    }

    #[test]
    fn test_leading_integer_then_clamp() {
        let parsed = parse_skill_list_detailed("A:7.9,B:-2");
        assert_eq!(pairs(&parsed.skills), vec![("A", 5), ("B", 1)]);
        assert_eq!(parsed.diagnostics.len(), 3);
        assert!(parse_skill_list_detailed("C:.5").diagnostics.iter().any(|d| matches!(
            d,
            ParseDiagnostic::InvalidLevel { .. }
        )));
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        let parsed = parse_skill_list_detailed("A:1,,:4,B");
        assert_eq!(pairs(&parsed.skills), vec![("A", 1), ("B", 3)]);
        assert_eq!(
            parsed.diagnostics,
            vec![
                ParseDiagnostic::EmptyToken { index: 1 },
                ParseDiagnostic::EmptyToken { index: 2 },
            ]
        );
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let skills = parse_skill_list("A:1,A:4");
        assert_eq!(pairs(&skills), vec![("A", 1), ("A", 4)]);
    }

    #[test]
    fn test_structured_list_used_verbatim() {
        let parsed =
            parse_skill_list_detailed(r#"[{"name":"Rust","level":5},{"name":"SQL","level":2}]"#);
        assert_eq!(parsed.shape, SkillShape::Structured);
        assert_eq!(pairs(&parsed.skills), vec![("Rust", 5), ("SQL", 2)]);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_malformed_structured_list_yields_empty() {
        for raw in [
            r#"[{"name":"Rust","level":5}"#,
            r#"[{"name":"Rust"}]"#,
            r#"[{"name":"Rust","level":7}]"#,
            r#"[{"name":"","level":2}]"#,
        ] {
            let parsed = parse_skill_list_detailed(raw);
            assert_eq!(parsed.shape, SkillShape::Structured, "{raw}");
            assert!(parsed.skills.is_empty(), "{raw}");
            assert!(
                matches!(parsed.diagnostics[..], [ParseDiagnostic::StructuredDecode { .. }]),
                "{raw}"
            );
        }
    }
}
