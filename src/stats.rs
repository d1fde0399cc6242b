use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::question::Question;

/// Aggregate view over a batch of extracted questions.
///
/// Ordered maps keep the serialized form deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionStats {
    pub total_questions: usize,
    pub categories: BTreeMap<String, usize>,
    pub difficulties: BTreeMap<String, usize>,
}

/// Pure reduction over the record sequence; order-independent
pub fn statistics(questions: &[Question]) -> QuestionStats {
    let mut categories = BTreeMap::new();
    let mut difficulties = BTreeMap::new();

    for question in questions {
        *categories.entry(question.category.clone()).or_insert(0) += 1;
        *difficulties
            .entry(question.difficulty.label().to_string())
            .or_insert(0) += 1;
    }

    QuestionStats {
        total_questions: questions.len(),
        categories,
        difficulties,
    }
}
