use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use qbank::{
    ChunkerConfig, DigitizeClient, ExamChunker, save_bank, save_questions, statistics,
    text_from_document,
};

/// Chunk an exam document into structured question records
#[derive(Parser, Debug)]
#[command(name = "qbank", version, about)]
struct Cli {
    /// Input document (.pdf, or already-extracted .txt/.md)
    input: PathBuf,

    /// Output path for the JSON question array
    #[arg(short, long, default_value = "questions.json")]
    output: PathBuf,

    /// Also write a bank file (manifest + records) to this path
    #[arg(long)]
    bank: Option<PathBuf>,

    /// Digitize through the remote document-parse API instead of local
    /// extraction
    #[arg(long)]
    remote: bool,

    /// Preserve single line breaks during normalization
    #[arg(long)]
    keep_line_breaks: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let start_time = Instant::now();
    println!("=== qbank: Exam Question Extraction Pipeline ===\n");

    // Step 1: Get raw text
    let step1_start = Instant::now();
    println!("Step 1: Extracting text from {}...", cli.input.display());
    let raw_text = if cli.remote {
        let client = DigitizeClient::from_env().context("Digitizer configuration failed")?;
        let response = client
            .digitize_file(&cli.input)
            .context("Remote digitization failed")?;
        response.markdown()
    } else {
        text_from_document(&cli.input)
    };
    println!(
        "✓ Extracted {} bytes [{:.2}s]\n",
        raw_text.len(),
        step1_start.elapsed().as_secs_f64()
    );

    // Step 2: Chunk into question records
    let step2_start = Instant::now();
    println!("Step 2: Chunking into questions...");
    let chunker = ExamChunker::new(ChunkerConfig {
        keep_line_breaks: cli.keep_line_breaks,
        ..ChunkerConfig::default()
    });
    let outcome = chunker.chunk(&raw_text);
    println!(
        "✓ Extracted {} questions ({} blocks skipped) [{:.2}s]\n",
        outcome.questions.len(),
        outcome.skipped.len(),
        step2_start.elapsed().as_secs_f64()
    );

    // Step 3: Export
    let step3_start = Instant::now();
    println!("Step 3: Exporting...");
    save_questions(&outcome.questions, &cli.output)?;
    if let Some(bank_path) = &cli.bank {
        save_bank(&outcome.questions, bank_path)?;
    }
    println!("✓ Export complete [{:.2}s]\n", step3_start.elapsed().as_secs_f64());

    // Step 4: Statistics
    let stats = statistics(&outcome.questions);
    println!("=== Question Statistics ===");
    println!("Total questions:      {}", stats.total_questions);
    println!("By category:");
    for (category, count) in &stats.categories {
        println!("  {:20} {}", category, count);
    }
    println!("By difficulty:");
    for (difficulty, count) in &stats.difficulties {
        println!("  {:20} {}", difficulty, count);
    }

    if let Some(question) = outcome.questions.first() {
        println!("\n=== Sample Question ===");
        println!("Question {}: {}", question.question_number, question.question_text);
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }
        if let Some(answer) = &question.answer {
            println!("Answer: {}", answer);
        }
        println!(
            "Category: {}, Difficulty: {}",
            question.category,
            question.difficulty.label()
        );
    }

    println!("\nTotal execution:      {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(())
}
