// Public API exports
pub mod digitizer;
pub mod engine;
pub mod export;
pub mod extract;
pub mod question;
pub mod stats;

// Re-export main types for convenience
pub use question::{Difficulty, Question};

pub use engine::{
    BlockSkip, BoundarySplitter, CategoryRule, ChunkOutcome, ChunkerConfig, ConventionSet,
    ExamChunker, MIN_OPTION_EVIDENCE, Normalizer, OptionConvention, Taxonomy,
};

pub use stats::{QuestionStats, statistics};

pub use export::{Bank, BankManifest, save_bank, save_questions};

pub use extract::text_from_document;

pub use digitizer::{DigitizeClient, DigitizeError, DigitizeResponse, MAX_PAGES_PER_UPLOAD};
