use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::question::Question;
use crate::stats::{QuestionStats, statistics};

const BANK_FORMAT_VERSION: &str = "1.0.0";

/// Top-level metadata written alongside the records in a bank export
#[derive(Debug, Serialize, Deserialize)]
pub struct BankManifest {
    pub version: String,
    pub created_at: String,
    pub generator: String,
    pub stats: QuestionStats,
}

/// A question bank: manifest plus the full record list
#[derive(Debug, Serialize, Deserialize)]
pub struct Bank {
    pub manifest: BankManifest,
    pub questions: Vec<Question>,
}

impl Bank {
    /// Bundle records with a freshly stamped manifest
    pub fn new(questions: Vec<Question>) -> Self {
        let manifest = BankManifest {
            version: BANK_FORMAT_VERSION.to_string(),
            created_at: Utc::now().to_rfc3339(),
            generator: format!("qbank v{}", env!("CARGO_PKG_VERSION")),
            stats: statistics(&questions),
        };
        Self {
            manifest,
            questions,
        }
    }
}

/// Write the records as a bare JSON array, one object per question
pub fn save_questions(questions: &[Question], output_path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(questions).context("Failed to serialize questions")?;
    fs::write(output_path, json).context(format!(
        "Failed to write output file: {}",
        output_path.display()
    ))?;
    eprintln!(
        "[export] ✓ Wrote {} questions to {}",
        questions.len(),
        output_path.display()
    );
    Ok(())
}

/// Write a bank file wrapping the records with a manifest
pub fn save_bank(questions: &[Question], output_path: &Path) -> Result<()> {
    let bank = Bank::new(questions.to_vec());
    let json = serde_json::to_string_pretty(&bank).context("Failed to serialize bank")?;
    fs::write(output_path, json).context(format!(
        "Failed to write bank file: {}",
        output_path.display()
    ))?;
    eprintln!(
        "[export] ✓ Wrote bank ({} questions) to {}",
        bank.questions.len(),
        output_path.display()
    );
    Ok(())
}
