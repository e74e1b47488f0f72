use serde::Deserialize;

/// Which collection an import or sample targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    Engineers,
    Positions,
}

const ENGINEERS_SAMPLE: &str = "name,yearsOfExperience,skills
山田太郎,5,JavaScript:4,TypeScript:3,React:5
佐藤花子,3,Python:4,Django:3,SQL:4
鈴木一郎,7,Java:5,Spring:4,AWS:3";

const POSITIONS_SAMPLE: &str = "title,department,requiredSkills
フロントエンドエンジニア,Web開発部,JavaScript:4,TypeScript:4,React:3
バックエンドエンジニア,サーバー開発部,Java:3,Spring:3,SQL:4
データサイエンティスト,AI研究部,Python:4,TensorFlow:3,SQL:3";

/// Demo export showing the expected upload shape.
pub fn sample_csv(kind: ImportKind) -> &'static str {
    match kind {
        ImportKind::Engineers => ENGINEERS_SAMPLE,
        ImportKind::Positions => POSITIONS_SAMPLE,
    }
}
