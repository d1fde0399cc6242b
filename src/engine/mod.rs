mod convention;
mod decomposer;
mod normalizer;
mod splitter;
mod taxonomy;

#[cfg(test)]
mod tests;

pub use convention::{ConventionSet, OptionConvention};
pub use decomposer::{BlockDecomposer, BlockSkip};
pub use normalizer::Normalizer;
pub use splitter::{BoundarySplitter, RawBlock};
pub use taxonomy::{CategoryRule, FALLBACK_CATEGORY, HIGH_DIFFICULTY_OPTION_COUNT, Taxonomy};

use crate::question::Question;

/// Minimum marker occurrences before a convention is trusted
pub const MIN_OPTION_EVIDENCE: usize = 2;

/// Engine configuration, owned by the chunker at construction time.
///
/// Keeping the tables here instead of in module-level statics lets tests
/// run alternative convention thresholds and keyword sets side by side.
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Preserve single newlines during normalization instead of collapsing
    /// every whitespace run to a space
    pub keep_line_breaks: bool,
    /// Marker occurrences required before a convention is selected
    pub min_option_evidence: usize,
    /// Category and difficulty keyword tables
    pub taxonomy: Taxonomy,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            keep_line_breaks: false,
            min_option_evidence: MIN_OPTION_EVIDENCE,
            taxonomy: Taxonomy::default(),
        }
    }
}

/// Everything one chunking pass produced
#[derive(Debug)]
pub struct ChunkOutcome {
    /// Records in document order
    pub questions: Vec<Question>,
    /// Per-block skip diagnostics, also in document order
    pub skipped: Vec<BlockSkip>,
}

/// The four-stage chunking pipeline: normalize, split on question
/// boundaries, resolve the option convention once per document, then
/// decompose every block into a record.
///
/// The engine holds no per-document state, so one value can serve
/// concurrent callers on different documents.
pub struct ExamChunker {
    normalizer: Normalizer,
    splitter: BoundarySplitter,
    conventions: ConventionSet,
    decomposer: BlockDecomposer,
}

impl ExamChunker {
    pub fn new(config: ChunkerConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config.keep_line_breaks),
            splitter: BoundarySplitter::new(),
            conventions: ConventionSet::new(config.min_option_evidence),
            decomposer: BlockDecomposer::new(config.taxonomy),
        }
    }

    /// Chunk one document's text into question records.
    ///
    /// Empty input (the extraction collaborator's failure signal) yields an
    /// empty outcome. A malformed block is skipped and reported; it never
    /// aborts the batch.
    pub fn chunk(&self, raw_text: &str) -> ChunkOutcome {
        let text = self.normalizer.normalize(raw_text);
        if text.is_empty() {
            return ChunkOutcome {
                questions: Vec::new(),
                skipped: Vec::new(),
            };
        }

        let convention = self.conventions.detect(&text);
        let blocks = self.splitter.split(&text);

        let mut questions = Vec::with_capacity(blocks.len());
        let mut skipped = Vec::new();
        for block in &blocks {
            match self.decomposer.decompose(block, convention, &self.conventions) {
                Ok(question) => questions.push(question),
                Err(skip) => {
                    eprintln!("[chunker] Skipping block: {}", skip);
                    skipped.push(skip);
                }
            }
        }

        ChunkOutcome { questions, skipped }
    }
}

impl Default for ExamChunker {
    fn default() -> Self {
        Self::new(ChunkerConfig::default())
    }
}
