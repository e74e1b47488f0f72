use serde::Serialize;
use tracing::info;

use crate::import::rows::{field, Row};
use crate::import::skill_parser::{parse_skill_list_detailed, ParseDiagnostic};
use crate::models::{Engineer, Position, Skill};

const UNNAMED_ENGINEER: &str = "名前なし";
const UNTITLED_POSITION: &str = "タイトルなし";
const NO_DEPARTMENT: &str = "部署なし";

/// Something worth telling the user about one imported row.
#[derive(Debug, Clone, Serialize)]
pub struct RowIssue {
    /// Zero-based data row index (header excluded).
    pub row: usize,
    #[serde(flatten)]
    pub kind: RowIssueKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum RowIssueKind {
    Skills { diagnostic: ParseDiagnostic },
    NoSkills,
    InvalidYears { raw: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct EngineerBatch {
    pub engineers: Vec<Engineer>,
    pub issues: Vec<RowIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionBatch {
    pub positions: Vec<Position>,
    pub issues: Vec<RowIssue>,
}

/// Id for the `index`-th row of an import batch.
pub fn import_id(batch: &str, index: usize) -> String {
    format!("import-{batch}-{index}")
}

/// Expects `name`, `yearsOfExperience` and `skills` columns.
pub fn engineers_from_rows(rows: &[Row], batch: &str) -> EngineerBatch {
    let mut issues = Vec::new();

    let engineers = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let skills = parse_skills_cell(row, "skills", index, &mut issues);
            Engineer {
                id: import_id(batch, index),
                name: field(row, "name").unwrap_or(UNNAMED_ENGINEER).to_string(),
                years_of_experience: parse_years(field(row, "yearsOfExperience"), index, &mut issues),
                skills,
            }
        })
        .collect::<Vec<_>>();

    info!(batch, rows = engineers.len(), issues = issues.len(), "Engineer import decoded");
    EngineerBatch { engineers, issues }
}

/// Expects `title`, `department` and `requiredSkills` columns.
pub fn positions_from_rows(rows: &[Row], batch: &str) -> PositionBatch {
    let mut issues = Vec::new();

    let positions = rows
        .iter()
        .enumerate()
        .map(|(index, row)| Position {
            id: import_id(batch, index),
            title: field(row, "title").unwrap_or(UNTITLED_POSITION).to_string(),
            department: field(row, "department").unwrap_or(NO_DEPARTMENT).to_string(),
            required_skills: parse_skills_cell(row, "requiredSkills", index, &mut issues),
        })
        .collect::<Vec<_>>();

    info!(batch, rows = positions.len(), issues = issues.len(), "Position import decoded");
    PositionBatch { positions, issues }
}

fn parse_skills_cell(
    row: &Row,
    column: &str,
    index: usize,
    issues: &mut Vec<RowIssue>,
) -> Vec<Skill> {
    let parsed = parse_skill_list_detailed(field(row, column).unwrap_or(""));
    issues.extend(parsed.diagnostics.into_iter().map(|diagnostic| RowIssue {
        row: index,
        kind: RowIssueKind::Skills { diagnostic },
    }));
    if parsed.skills.is_empty() {
        issues.push(RowIssue {
            row: index,
            kind: RowIssueKind::NoSkills,
        });
    }
    parsed.skills
}

fn parse_years(raw: Option<&str>, index: usize, issues: &mut Vec<RowIssue>) -> u32 {
    let Some(raw) = raw else { return 0 };
    match raw.parse::<u32>() {
        Ok(years) => years,
        Err(_) => {
            issues.push(RowIssue {
                row: index,
                kind: RowIssueKind::InvalidYears {
                    raw: raw.to_string(),
                },
            });
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::rows::read_rows;

    #[test]
    fn test_engineer_rows_get_batch_ids_and_defaults() {
        let rows = read_rows("name,yearsOfExperience,skills\n,x,\nAlice,4,Rust:5").unwrap();
        let batch = engineers_from_rows(&rows, "1700000000000");

        assert_eq!(batch.engineers[0].id, "import-1700000000000-0");
        assert_eq!(batch.engineers[0].name, UNNAMED_ENGINEER);
        assert_eq!(batch.engineers[0].years_of_experience, 0);
        assert!(batch.engineers[0].skills.is_empty());

        assert_eq!(batch.engineers[1].id, "import-1700000000000-1");
        assert_eq!(batch.engineers[1].name, "Alice");
        assert_eq!(batch.engineers[1].skills.len(), 1);

        assert!(batch
            .issues
            .iter()
            .any(|i| i.row == 0 && matches!(i.kind, RowIssueKind::InvalidYears { .. })));
        assert!(batch
            .issues
            .iter()
            .any(|i| i.row == 0 && matches!(i.kind, RowIssueKind::NoSkills)));
        assert!(batch.issues.iter().all(|i| i.row == 0));
    }

    #[test]
    fn test_empty_row_keeps_file_order() {
        let rows = read_rows("name,yearsOfExperience,skills\n,,\nBob,1,A:2").unwrap();
        let batch = engineers_from_rows(&rows, "b");

        assert_eq!(batch.engineers.len(), 2);
        assert_eq!(batch.engineers[0].name, UNNAMED_ENGINEER);
        assert_eq!(batch.engineers[1].id, "import-b-1");
        assert!(batch
            .issues
            .iter()
            .any(|i| i.row == 0 && matches!(i.kind, RowIssueKind::NoSkills)));
    }

    #[test]
    fn test_position_rows_fill_missing_fields() {
        let rows = read_rows("title,department,requiredSkills\n,,\"[{\"\"name\"\":\"\"Go\"\",\"\"level\"\":4}]\"").unwrap();
        let batch = positions_from_rows(&rows, "b");
        let position = &batch.positions[0];
        assert_eq!(position.title, UNTITLED_POSITION);
        assert_eq!(position.department, NO_DEPARTMENT);
        assert_eq!(position.required_skills.len(), 1);
        assert_eq!(position.required_skills[0].level.get(), 4);
        assert!(batch.issues.is_empty());
    }

    #[test]
    fn test_skill_diagnostics_carry_row_index() {
        let rows = read_rows("title,department,requiredSkills\nA,B,Go:9").unwrap();
        let batch = positions_from_rows(&rows, "b");
        assert_eq!(batch.issues.len(), 1);
        assert!(matches!(
            batch.issues[0].kind,
            RowIssueKind::Skills {
                diagnostic: ParseDiagnostic::LevelClamped { .. }
            }
        ));
    }
}
