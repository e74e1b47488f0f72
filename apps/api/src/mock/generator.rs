//! Mock Entity Generator: large pseudo-random engineer/position populations
//! for exercising the matcher.
//!
//! Randomness comes through `RandomSource`; `fastrand::Rng` implements it and
//! `MockGenerator::with_seed` makes a run reproducible.

use std::collections::HashSet;

use crate::models::{Engineer, Position, Skill, SkillLevel};

// ────────────────────────────────────────────────────────────────────────────
// Randomness seam
// ────────────────────────────────────────────────────────────────────────────

pub trait RandomSource {
    /// Uniform integer in `min..=max`.
    fn int_in(&mut self, min: u32, max: u32) -> u32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    /// Up to `count` distinct items, drawn without replacement.
    fn sample<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut pool = items.to_vec();
        let take = count.min(pool.len());
        // Partial Fisher–Yates.
        for i in 0..take {
            let j = i + self.index(pool.len() - i);
            pool.swap(i, j);
        }
        pool.truncate(take);
        pool
    }
}

impl RandomSource for fastrand::Rng {
    fn int_in(&mut self, min: u32, max: u32) -> u32 {
        self.u32(min..=max)
    }

    fn index(&mut self, len: usize) -> usize {
        self.usize(..len)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed pools
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    Mobile,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Devops,
        SkillCategory::Mobile,
        SkillCategory::Other,
    ];

    pub fn members(self) -> &'static [&'static str] {
        match self {
            SkillCategory::Frontend => &[
                "JavaScript", "TypeScript", "React", "Vue.js", "Angular", "HTML", "CSS",
                "Sass/SCSS", "Tailwind CSS", "Next.js", "Nuxt.js",
            ],
            SkillCategory::Backend => &[
                "Node.js", "Express", "Java", "Spring", "Python", "Django", "C#", ".NET", "PHP",
                "Laravel", "Ruby", "Rails", "Go",
            ],
            SkillCategory::Database => &[
                "SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "GraphQL", "Oracle", "SQLite",
                "Firebase",
            ],
            SkillCategory::Devops => &[
                "Docker", "Kubernetes", "AWS", "Azure", "GCP", "CI/CD", "Git", "GitHub Actions",
                "Jenkins", "Terraform",
            ],
            SkillCategory::Mobile => &[
                "Swift", "Kotlin", "React Native", "Flutter", "Android", "iOS", "Xamarin",
            ],
            SkillCategory::Other => &[
                "Agile/Scrum", "TDD", "Jest", "Cypress", "Selenium", "WebRTC", "WebSockets", "PWA",
                "Electron", "Machine Learning", "AI", "Data Science", "Blockchain", "AR/VR", "IoT",
            ],
        }
    }
}

/// Role suffix of a generated title; decides the primary skill category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSuffix {
    Engineer,
    Developer,
    Architect,
    Analyst,
    Manager,
    Director,
    Coordinator,
    Programmer,
    Tester,
    Administrator,
}

impl RoleSuffix {
    pub const ALL: [RoleSuffix; 10] = [
        RoleSuffix::Engineer,
        RoleSuffix::Developer,
        RoleSuffix::Architect,
        RoleSuffix::Analyst,
        RoleSuffix::Manager,
        RoleSuffix::Director,
        RoleSuffix::Coordinator,
        RoleSuffix::Programmer,
        RoleSuffix::Tester,
        RoleSuffix::Administrator,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoleSuffix::Engineer => "エンジニア",
            RoleSuffix::Developer => "デベロッパー",
            RoleSuffix::Architect => "アーキテクト",
            RoleSuffix::Analyst => "アナリスト",
            RoleSuffix::Manager => "マネージャー",
            RoleSuffix::Director => "ディレクター",
            RoleSuffix::Coordinator => "コーディネーター",
            RoleSuffix::Programmer => "プログラマー",
            RoleSuffix::Tester => "テスター",
            RoleSuffix::Administrator => "アドミニストレーター",
        }
    }

    /// Categories the primary skills are drawn from.
    pub fn primary_candidates(self) -> &'static [SkillCategory] {
        use SkillCategory::{Backend, Database, Devops, Frontend, Mobile, Other};
        match self {
            RoleSuffix::Engineer | RoleSuffix::Developer | RoleSuffix::Programmer => {
                &[Frontend, Backend, Mobile]
            }
            RoleSuffix::Architect | RoleSuffix::Administrator => &[Backend, Devops, Database],
            RoleSuffix::Analyst => &[Database, Other],
            _ => &SkillCategory::ALL,
        }
    }
}

const SURNAMES: &[&str] = &[
    "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林", "加藤", "吉田", "山田",
    "佐々木", "山口", "松本", "井上", "木村", "林", "斎藤", "清水", "山崎", "森", "池田", "橋本",
    "阿部", "石川", "山下", "中島", "前田", "藤田", "後藤", "小川", "岡田", "村上", "長谷川",
    "近藤", "石井", "斉藤", "坂本", "遠藤", "藤井", "青木", "福田", "三浦", "西村", "藤原", "太田",
    "松田", "原田", "岡本", "中川", "中野", "酒井", "久保", "河野", "金子", "杉本", "水野", "増田",
    "小島", "小山", "大野", "高木", "藤本", "谷口", "安藤", "丸山", "今井", "高田", "菅原", "工藤",
    "武田", "内田", "横山", "宮崎", "上野", "宮本", "大塚", "新井", "平野", "松井", "浜田", "小松",
    "菊地", "野口", "渡部", "榎本", "大西", "森田", "菅野", "村田", "大久保", "岩崎", "松尾",
    "佐野", "木下", "野村", "松村", "森本", "永井",
];

const GIVEN_NAMES: &[&str] = &[
    "翔太", "拓也", "健太", "大輔", "直樹", "和也", "達也", "健", "裕太", "亮", "優", "誠", "浩二",
    "健一", "真一", "豊", "茂", "明", "浩", "淳", "美咲", "さくら", "陽子", "真由美", "裕子", "恵",
    "愛", "彩", "麻衣", "舞", "由美子", "久美子", "智子", "和子", "京子", "恵子", "洋子", "幸子",
    "香織", "真美", "大輝", "悠斗", "悠真", "陽翔", "蓮", "湊", "陸", "颯真", "悠人", "陽太",
    "結菜", "陽菜", "凛", "咲良", "葵", "心春", "陽葵", "紬", "結愛", "莉子",
];

const DEPARTMENTS: &[&str] = &[
    "Webアプリケーション開発部",
    "モバイルアプリ開発部",
    "フロントエンド開発部",
    "バックエンド開発部",
    "インフラストラクチャー部",
    "クラウドサービス部",
    "AI研究開発部",
    "データサイエンス部",
    "IoT開発部",
    "セキュリティ対策部",
    "QA/テスト部",
    "DevOps部",
    "プロダクト開発部",
    "エンタープライズソリューション部",
    "ゲーム開発部",
    "AR/VR開発部",
    "ブロックチェーン開発部",
    "システムインテグレーション部",
    "UX/UIデザイン部",
    "テクニカルサポート部",
];

const TITLE_PREFIXES: &[&str] = &[
    "シニア",
    "ジュニア",
    "リード",
    "チーフ",
    "プリンシパル",
    "スタッフ",
    "アソシエイト",
    "エキスパート",
    "コンサルタント",
    "スペシャリスト",
];

// ────────────────────────────────────────────────────────────────────────────
// Generator
// ────────────────────────────────────────────────────────────────────────────

/// Stateful generator. Ids continue from its own sequence across calls, so
/// consecutive batches never reuse an id.
pub struct MockGenerator<R: RandomSource = fastrand::Rng> {
    rng: R,
    next_engineer: u64,
    next_position: u64,
}

impl MockGenerator<fastrand::Rng> {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    /// Restarts the random stream without resetting the id sequence.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = fastrand::Rng::with_seed(seed);
    }
}

impl Default for MockGenerator<fastrand::Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> MockGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            next_engineer: 1,
            next_position: 1,
        }
    }

    pub fn generate_engineers(&mut self, count: usize) -> Vec<Engineer> {
        (0..count).map(|_| self.engineer()).collect()
    }

    pub fn generate_positions(&mut self, count: usize) -> Vec<Position> {
        (0..count).map(|_| self.position()).collect()
    }

    fn engineer(&mut self) -> Engineer {
        let id = format!("eng-mock-{}", self.next_engineer);
        self.next_engineer += 1;

        let surname = *self.rng.pick(SURNAMES);
        let given = *self.rng.pick(GIVEN_NAMES);
        let years_of_experience = self.rng.int_in(1, 15);

        Engineer {
            id,
            name: format!("{surname} {given}"),
            years_of_experience,
            skills: self.engineer_skills(),
        }
    }

    /// 3–8 distinct skills drawn from the union of 1–3 random categories.
    /// Every category has at least 7 members, so at least 3 are always available.
    fn engineer_skills(&mut self) -> Vec<Skill> {
        let target = self.rng.int_in(3, 8) as usize;
        let category_count = self.rng.int_in(1, 3) as usize;
        let categories = self.rng.sample(&SkillCategory::ALL, category_count);

        let mut seen = HashSet::new();
        let pool: Vec<&'static str> = categories
            .iter()
            .flat_map(|c| c.members().iter().copied())
            .filter(|name| seen.insert(*name))
            .collect();

        self.rng
            .sample(&pool, target)
            .into_iter()
            .map(|name| self.skill(name, 1))
            .collect()
    }

    fn position(&mut self) -> Position {
        let id = format!("pos-mock-{}", self.next_position);
        self.next_position += 1;

        let prefix = *self.rng.pick(TITLE_PREFIXES);
        let suffix = *self.rng.pick(&RoleSuffix::ALL);
        let department = *self.rng.pick(DEPARTMENTS);

        Position {
            id,
            title: format!("{prefix}{}", suffix.label()),
            department: department.to_string(),
            required_skills: self.position_skills(suffix),
        }
    }

    /// 2–4 skills from the suffix's primary category plus 1–3 from one other
    /// category. Categories are disjoint, so the result always has 3–7 skills.
    fn position_skills(&mut self, suffix: RoleSuffix) -> Vec<Skill> {
        let primary = *self.rng.pick(suffix.primary_candidates());
        let others: Vec<SkillCategory> = SkillCategory::ALL
            .into_iter()
            .filter(|c| *c != primary)
            .collect();
        let secondary = *self.rng.pick(&others);

        let primary_count = self.rng.int_in(2, 4) as usize;
        let secondary_count = self.rng.int_in(1, 3) as usize;

        let mut names = self.rng.sample(primary.members(), primary_count);
        names.extend(self.rng.sample(secondary.members(), secondary_count));

        let mut seen = HashSet::new();
        names.retain(|name| seen.insert(*name));

        names.into_iter().map(|name| self.skill(name, 2)).collect()
    }

    fn skill(&mut self, name: &str, min_level: u32) -> Skill {
        let level = SkillLevel::saturating(i64::from(self.rng.int_in(min_level, 5)));
        Skill {
            name: name.to_string(),
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_names(skills: &[Skill]) -> bool {
        let names: HashSet<_> = skills.iter().map(|s| s.name.as_str()).collect();
        names.len() == skills.len()
    }

    #[test]
    fn test_engineer_invariants() {
        let mut generator = MockGenerator::with_seed(7);
        for engineer in generator.generate_engineers(500) {
            assert!((3..=8).contains(&engineer.skills.len()), "{engineer:?}");
            assert!(unique_names(&engineer.skills), "{engineer:?}");
            assert!((1..=15).contains(&engineer.years_of_experience));
            assert!(!engineer.name.trim().is_empty());
        }
    }

    #[test]
    fn test_position_invariants() {
        let mut generator = MockGenerator::with_seed(11);
        for position in generator.generate_positions(500) {
            let n = position.required_skills.len();
            assert!((3..=7).contains(&n), "{position:?}");
            assert!(unique_names(&position.required_skills), "{position:?}");
            assert!(position.required_skills.iter().all(|s| s.level.get() >= 2));
            assert!(DEPARTMENTS.contains(&position.department.as_str()));
        }
    }

    #[test]
    fn test_ids_continue_across_batches() {
        let mut generator = MockGenerator::with_seed(1);
        let first = generator.generate_engineers(2);
        let second = generator.generate_engineers(1);
        assert_eq!(first[0].id, "eng-mock-1");
        assert_eq!(first[1].id, "eng-mock-2");
        assert_eq!(second[0].id, "eng-mock-3");
        assert_eq!(generator.generate_positions(1)[0].id, "pos-mock-1");
    }

    #[test]
    fn test_reseed_keeps_id_sequence() {
        let mut generator = MockGenerator::with_seed(1);
        generator.generate_engineers(3);
        generator.reseed(99);
        let next = generator.generate_engineers(1);
        assert_eq!(next[0].id, "eng-mock-4");

        let mut fresh = MockGenerator::with_seed(99);
        assert_eq!(fresh.generate_engineers(1)[0].skills, next[0].skills);
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = MockGenerator::with_seed(42).generate_positions(20);
        let b = MockGenerator::with_seed(42).generate_positions(20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_primary_category_rule() {
        let mut generator = MockGenerator::with_seed(3);
        for _ in 0..200 {
            let skills = generator.position_skills(RoleSuffix::Analyst);
            let from_primary = skills
                .iter()
                .filter(|s| {
                    SkillCategory::Database.members().contains(&s.name.as_str())
                        || SkillCategory::Other.members().contains(&s.name.as_str())
                })
                .count();
            assert!(from_primary >= 2);
        }
    }

    #[test]
    fn test_categories_are_disjoint() {
        let mut seen = HashSet::new();
        for category in SkillCategory::ALL {
            for name in category.members() {
                assert!(seen.insert(*name), "{name} appears twice");
            }
        }
    }

    #[test]
    fn test_sample_never_exceeds_pool() {
        let mut rng = fastrand::Rng::with_seed(5);
        let picked = rng.sample(&["a", "b"], 5);
        assert_eq!(picked.len(), 2);
        assert!(picked.contains(&"a") && picked.contains(&"b"));
    }
}
