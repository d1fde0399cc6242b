use crate::question::Difficulty;

/// One category with its trigger substrings
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub label: String,
    pub triggers: Vec<String>,
}

impl CategoryRule {
    pub fn new(label: &str, triggers: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            triggers: triggers.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Label assigned when no category trigger matches the stem
pub const FALLBACK_CATEGORY: &str = "기타";

/// Option counts above this force a high difficulty rating
pub const HIGH_DIFFICULTY_OPTION_COUNT: usize = 4;

/// Keyword tables backing category and difficulty tagging.
///
/// Categories are scanned in declared order and the first rule with any
/// trigger present in the stem wins, so the table order is part of the
/// classifier's contract. Single-label only.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<CategoryRule>,
    complexity_terms: Vec<String>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        let categories = vec![
            CategoryRule::new(
                "프로그래밍",
                &["코드", "프로그램", "함수", "변수", "알고리즘", "Java", "Python", "C++"],
            ),
            CategoryRule::new(
                "데이터베이스",
                &["SQL", "DB", "데이터베이스", "테이블", "쿼리", "관계형"],
            ),
            CategoryRule::new(
                "네트워크",
                &["네트워크", "TCP", "IP", "OSI", "프로토콜", "라우터"],
            ),
            CategoryRule::new("보안", &["보안", "암호화", "해킹", "인증", "방화벽"]),
            CategoryRule::new(
                "시스템",
                &["운영체제", "OS", "메모리", "프로세스", "스케줄링"],
            ),
            CategoryRule::new(
                "소프트웨어공학",
                &["설계", "모델링", "UML", "요구사항", "테스트"],
            ),
        ];

        let complexity_terms = ["구현", "설계", "분석", "평가", "비교"]
            .iter()
            .map(|t| t.to_string())
            .collect();

        Self {
            categories,
            complexity_terms,
        }
    }
}

impl Taxonomy {
    pub fn new(categories: Vec<CategoryRule>, complexity_terms: Vec<String>) -> Self {
        Self {
            categories,
            complexity_terms,
        }
    }

    /// First category whose trigger appears in the stem, else the fallback
    pub fn categorize(&self, stem: &str) -> &str {
        for rule in &self.categories {
            if rule.triggers.iter().any(|t| stem.contains(t.as_str())) {
                return &rule.label;
            }
        }
        FALLBACK_CATEGORY
    }

    /// Three-tier rating. The option-count rule is checked first and wins
    /// regardless of stem content.
    pub fn difficulty(&self, stem: &str, option_count: usize) -> Difficulty {
        if option_count > HIGH_DIFFICULTY_OPTION_COUNT {
            Difficulty::High
        } else if self
            .complexity_terms
            .iter()
            .any(|t| stem.contains(t.as_str()))
        {
            Difficulty::Medium
        } else {
            Difficulty::Low
        }
    }
}
