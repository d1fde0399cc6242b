use regex::Regex;
use thiserror::Error;

use super::convention::{ConventionSet, OptionConvention};
use super::splitter::RawBlock;
use super::taxonomy::Taxonomy;
use crate::question::Question;

/// Label introducing the answer token
const ANSWER_LABEL: &str = "정답";

/// Why one block was dropped from the output
#[derive(Debug, Error)]
pub enum BlockSkip {
    #[error("question number {raw:?} at offset {offset} is not a valid number")]
    BadNumber { raw: String, offset: usize },
}

/// Splits one block into stem, options, answer and explanation, then tags
/// it with a category and a difficulty.
pub struct BlockDecomposer {
    /// `정답` plus the union of all recognized marker alphabets
    answer: Regex,
    /// `해설`/`설명` label with its delimiter run
    explanation_label: Regex,
    /// A question boundary re-appearing inside a block, newline anchored
    embedded_boundary: Regex,
    taxonomy: Taxonomy,
}

impl BlockDecomposer {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            answer: Regex::new(r"정답[:\s]*([①②③④⑤1-5가나다라마A-E])").expect("answer pattern"),
            explanation_label: Regex::new(r"(?:해설|설명)[:\s]*").expect("explanation pattern"),
            embedded_boundary: Regex::new(r"\n\d+[.)]").expect("embedded-boundary pattern"),
            taxonomy,
        }
    }

    /// Decompose one block into a fully populated record.
    ///
    /// `convention` is the document-level decision; when the block contains
    /// no occurrence of that marker, detection is re-run over the block
    /// alone so a stray block in another style still yields its options. A
    /// document-level `None` is final.
    pub fn decompose(
        &self,
        block: &RawBlock<'_>,
        convention: Option<OptionConvention>,
        conventions: &ConventionSet,
    ) -> Result<Question, BlockSkip> {
        let question_number: u32 = block.number.parse().map_err(|_| BlockSkip::BadNumber {
            raw: block.number.to_string(),
            offset: block.offset,
        })?;

        let effective = self.effective_convention(block.body, convention, conventions);
        let marker = effective.map(|c| conventions.pattern(c));

        let options = match marker {
            Some(marker) => self.extract_options(block.body, marker),
            None => Vec::new(),
        };
        let question_text = self.extract_stem(block.body, marker);
        let answer = self.extract_answer(block.body);
        let explanation = self.extract_explanation(block.body);
        let category = self.taxonomy.categorize(&question_text).to_string();
        let difficulty = self.taxonomy.difficulty(&question_text, options.len());

        Ok(Question {
            question_number,
            question_text,
            options,
            answer,
            explanation,
            category,
            difficulty,
        })
    }

    fn effective_convention(
        &self,
        body: &str,
        document: Option<OptionConvention>,
        conventions: &ConventionSet,
    ) -> Option<OptionConvention> {
        let convention = document?;
        if conventions.pattern(convention).is_match(body) {
            Some(convention)
        } else {
            conventions.detect(body)
        }
    }

    /// First line of the block, cut before the earliest of the option
    /// marker, the answer label and the explanation label, then trimmed.
    fn extract_stem(&self, body: &str, marker: Option<&Regex>) -> String {
        let first_line = body.split('\n').next().unwrap_or("");
        let mut cut = first_line.len();
        if let Some(marker) = marker {
            if let Some(m) = marker.find(first_line) {
                cut = cut.min(m.start());
            }
        }
        if let Some(pos) = first_line.find(ANSWER_LABEL) {
            cut = cut.min(pos);
        }
        if let Some(m) = self.explanation_label.find(first_line) {
            cut = cut.min(m.start());
        }
        first_line[..cut].trim().to_string()
    }

    /// Split the option region on every marker occurrence. The text before
    /// the first marker is stem material; each later segment is one option,
    /// truncated at any embedded boundary and dropped when empty.
    fn extract_options(&self, body: &str, marker: &Regex) -> Vec<String> {
        let region = &body[..self.option_region_end(body)];

        let mut options = Vec::new();
        for part in marker.split(region).skip(1) {
            let part = match self.embedded_boundary.find(part) {
                Some(m) => &part[..m.start()],
                None => part,
            };
            let part = part.trim();
            if !part.is_empty() {
                options.push(part.to_string());
            }
        }
        options
    }

    /// Options never live past the answer or explanation labels
    fn option_region_end(&self, body: &str) -> usize {
        let mut end = body.len();
        if let Some(pos) = body.find(ANSWER_LABEL) {
            end = end.min(pos);
        }
        if let Some(m) = self.explanation_label.find(body) {
            end = end.min(m.start());
        }
        end
    }

    fn extract_answer(&self, body: &str) -> Option<String> {
        self.answer.captures(body).map(|caps| caps[1].to_string())
    }

    /// Text after the explanation label, up to the nearest of an embedded
    /// boundary, the next answer label, or end of block.
    fn extract_explanation(&self, body: &str) -> Option<String> {
        let label = self.explanation_label.find(body)?;
        let rest = &body[label.end()..];

        let mut end = rest.len();
        if let Some(m) = self.embedded_boundary.find(rest) {
            end = end.min(m.start());
        }
        if let Some(pos) = rest.find(ANSWER_LABEL) {
            end = end.min(pos);
        }

        let explanation = rest[..end].trim();
        if explanation.is_empty() {
            None
        } else {
            Some(explanation.to_string())
        }
    }
}
