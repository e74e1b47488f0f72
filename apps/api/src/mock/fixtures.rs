//! Built-in demo records and the selectable skill catalog.

use tracing::info;

use crate::mock::generator::{MockGenerator, RandomSource};
use crate::models::{Engineer, Position, Skill, SkillLevel};

/// Skill names offered by search filters and entry forms.
pub const SKILL_CATALOG: &[&str] = &[
    "JavaScript", "TypeScript", "React", "Vue.js", "Angular", "Node.js", "Express", "Next.js",
    "Nuxt.js", "HTML", "CSS", "Sass/SCSS", "Tailwind CSS", "Java", "Spring", "Python", "Django",
    "C#", ".NET", "PHP", "Laravel", "Ruby", "Rails", "Go", "Rust", "Swift", "Kotlin", "SQL",
    "MySQL", "PostgreSQL", "MongoDB", "Redis", "GraphQL", "REST API", "Docker", "Kubernetes",
    "AWS", "Azure", "GCP", "CI/CD", "Git", "GitHub Actions", "Jenkins", "Agile/Scrum", "TDD",
    "Jest", "Cypress", "Selenium", "WebRTC", "WebSockets", "PWA", "Electron", "React Native",
    "Flutter", "Unity", "Unreal Engine", "Machine Learning", "AI", "Data Science", "Blockchain",
    "AR/VR", "IoT", "Firebase", "Oracle", "SQLite", "Terraform", "Android", "iOS", "Xamarin",
    "TensorFlow",
];

fn skills(pairs: &[(&str, u8)]) -> Vec<Skill> {
    pairs
        .iter()
        .map(|(name, level)| Skill {
            name: (*name).to_string(),
            level: SkillLevel::saturating(i64::from(*level)),
        })
        .collect()
}

fn engineer(id: &str, name: &str, years: u32, held: &[(&str, u8)]) -> Engineer {
    Engineer {
        id: id.to_string(),
        name: name.to_string(),
        years_of_experience: years,
        skills: skills(held),
    }
}

fn position(id: &str, title: &str, department: &str, required: &[(&str, u8)]) -> Position {
    Position {
        id: id.to_string(),
        title: title.to_string(),
        department: department.to_string(),
        required_skills: skills(required),
    }
}

pub fn base_engineers() -> Vec<Engineer> {
    vec![
        engineer(
            "eng-1",
            "山田 太郎",
            5,
            &[("JavaScript", 4), ("TypeScript", 3), ("React", 4), ("Node.js", 3), ("AWS", 2)],
        ),
        engineer(
            "eng-2",
            "佐藤 花子",
            3,
            &[("Python", 4), ("Django", 3), ("SQL", 4), ("Docker", 2), ("Git", 3)],
        ),
        engineer(
            "eng-3",
            "鈴木 一郎",
            7,
            &[("Java", 5), ("Spring", 4), ("SQL", 4), ("AWS", 3), ("Kubernetes", 3)],
        ),
        engineer(
            "eng-4",
            "高橋 次郎",
            2,
            &[("HTML", 4), ("CSS", 4), ("JavaScript", 3), ("Vue.js", 3), ("Tailwind CSS", 4)],
        ),
        engineer(
            "eng-5",
            "田中 三郎",
            8,
            &[("C#", 5), (".NET", 4), ("SQL", 4), ("Azure", 4), ("Docker", 3)],
        ),
        engineer(
            "eng-6",
            "伊藤 美咲",
            4,
            &[("React", 5), ("TypeScript", 4), ("Next.js", 4), ("GraphQL", 3), ("Tailwind CSS", 4)],
        ),
    ]
}

pub fn base_positions() -> Vec<Position> {
    vec![
        position(
            "pos-1",
            "フロントエンドエンジニア",
            "Webアプリケーション開発部",
            &[("JavaScript", 4), ("TypeScript", 3), ("React", 4), ("HTML", 3), ("CSS", 3)],
        ),
        position(
            "pos-2",
            "バックエンドエンジニア",
            "サーバーサイド開発部",
            &[("Java", 4), ("Spring", 3), ("SQL", 4), ("Docker", 3), ("AWS", 2)],
        ),
        position(
            "pos-3",
            "データサイエンティスト",
            "AI研究開発部",
            &[("Python", 4), ("Machine Learning", 3), ("SQL", 3), ("Data Science", 4), ("TensorFlow", 3)],
        ),
        position(
            "pos-4",
            "フルスタックエンジニア",
            "プロダクト開発部",
            &[("JavaScript", 4), ("React", 3), ("Node.js", 3), ("MongoDB", 3), ("Docker", 2)],
        ),
        position(
            "pos-5",
            "モバイルアプリ開発者",
            "モバイルアプリ開発部",
            &[("Swift", 4), ("Kotlin", 4), ("React Native", 3), ("Firebase", 3), ("Git", 3)],
        ),
    ]
}

/// Base fixtures followed by `extra_engineers` / `extra_positions` generated records.
pub fn demo_population<R: RandomSource>(
    generator: &mut MockGenerator<R>,
    extra_engineers: usize,
    extra_positions: usize,
) -> (Vec<Engineer>, Vec<Position>) {
    let mut engineers = base_engineers();
    engineers.extend(generator.generate_engineers(extra_engineers));

    let mut positions = base_positions();
    positions.extend(generator.generate_positions(extra_positions));

    info!(
        engineers = engineers.len(),
        positions = positions.len(),
        "Demo population loaded"
    );
    (engineers, positions)
}
