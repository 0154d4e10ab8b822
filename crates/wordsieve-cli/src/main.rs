//! # Wordsieve CLI
//!
//! Thin front-end over `wordsieve-core`: loads a document, builds the
//! membership filter, answers one query, prints the statistics block, then
//! validates the filter against the document it was built from.
//!
//! All file and prompt handling lives here; the core never touches I/O.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wordsieve_core::{
    ConfusionMatrix, DocumentIndex, FilterStats, IndexConfig, QueryOutcome, ValidationHarness,
};

/// Load configuration from the environment.
fn load_config() -> Result<IndexConfig> {
    match env::var("WORDSIEVE_TARGET_FPR") {
        Ok(raw) => {
            let fpr: f64 = raw
                .parse()
                .context("WORDSIEVE_TARGET_FPR must be a number")?;
            let config = IndexConfig::new(fpr)?;
            info!(target_fpr = fpr, "target rate loaded from environment");
            Ok(config)
        }
        Err(_) => Ok(IndexConfig::default()),
    }
}

/// Take the query word from the command line, or prompt for one.
fn read_query_word(arg: Option<String>) -> Result<String> {
    if let Some(word) = arg {
        return Ok(word);
    }

    print!("Enter a word to check (case sensitive): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read query word")?;
    Ok(line.trim().to_string())
}

fn print_stats(stats: &FilterStats) -> Result<()> {
    let as_json = env::var("WORDSIEVE_STATS_JSON")
        .map(|v| v == "1")
        .unwrap_or(false);

    if as_json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("_____________________________________________________________");
    println!("| Number of elements added (n): {}", stats.elements_added);
    println!("| Size of bit array (m): {}", stats.bit_array_size);
    println!(
        "| Probability of false positives (p): {}",
        stats.target_false_positive_rate
    );
    println!("| Number of hash functions used (k): {}", stats.hash_count);
    println!("=============================================================");
    Ok(())
}

fn print_validation(matrix: &ConfusionMatrix) {
    println!("| RESULTS:");
    println!("|========");
    println!("| True Negatives: {}", matrix.true_negatives);
    println!("| False Negatives: {}", matrix.false_negatives);
    println!("| True Positives: {}", matrix.true_positives);
    println!("| False Positives: {}", matrix.false_positives);
    println!("_____________________________________________________________");
    println!("~ False Positive Rate: {}", matrix.false_positive_rate());
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: wordsieve <document> [query-word]");
    };
    let query_arg = args.next();

    let config = load_config()?;

    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read document {}", path))?;
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    info!(path = %path, words = words.len(), "document loaded");

    let index = DocumentIndex::build(&words, config)?;

    let query = read_query_word(query_arg)?;
    match index.query(&query)? {
        QueryOutcome::MaybePresent => {
            println!("'{}' is in the document (possibly a true positive).", query);
        }
        QueryOutcome::DefinitelyAbsent => {
            println!("'{}' is NOT in the document (definitely absent).", query);
        }
    }

    print_stats(&index.stats())?;

    info!("validating filter against the loaded document");
    let harness = ValidationHarness::new(words.clone());
    let matrix = harness.validate(index.filter(), &words)?;
    print_validation(&matrix);

    Ok(())
}
