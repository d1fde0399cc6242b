use serde::{Deserialize, Serialize};

/// A single extracted exam question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Number parsed from the boundary marker, exactly as printed in the source
    pub question_number: u32,
    /// The question stem
    pub question_text: String,
    /// Options in order of appearance, no dedup
    pub options: Vec<String>,
    /// Answer token, when an answer label was found
    pub answer: Option<String>,
    /// Explanation text, when present
    pub explanation: Option<String>,
    /// First matching label of the category table
    pub category: String,
    /// Heuristic difficulty rating
    pub difficulty: Difficulty,
}

/// Three-tier difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    /// Stable string form, also used as statistics keys
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }
}
