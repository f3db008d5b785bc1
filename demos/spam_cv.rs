//! Spam Cross-Validation Example
//!
//! Demonstrates the full spamfold pipeline on a small inline corpus:
//! - Tokenizing raw email text and dropping English stop words
//! - Selecting a frequency-ranked vocabulary
//! - Building sparse count vectors
//! - Scoring a baseline classifier with plain and stratified k-fold
//!
//! An optional JSON file overrides the pipeline configuration:
//!
//! Run with: cargo run --example spam_cv [config.json]
//! Logs: RUST_LOG=spamfold=debug cargo run --example spam_cv

use spamfold::metrics::ConfusionCounts;
use spamfold::pipeline::{parse_label, tokenize_corpus};
use spamfold::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CORPUS: &[(&str, &str)] = &[
    ("spam", "WIN a FREE cruise now! Click here to claim your prize"),
    ("ham", "Can we move the project meeting to Thursday afternoon?"),
    ("spam", "Cheap pills, no prescription needed, order now"),
    ("ham", "Attached are the notes from yesterday's budget review"),
    ("spam", "Your account has been selected for a cash reward, click now"),
    ("ham", "Lunch tomorrow? The new place near the office looks good"),
    ("spam", "Limited offer: free cash prize for the first 100 callers"),
    ("ham", "Reminder: the quarterly report deadline is Friday"),
    ("spam", "Claim your free gift card now, offer expires tonight"),
    ("ham", "Thanks for the review, I pushed the fixes to the branch"),
    ("ham", "The team call moved to 3pm, same link as before"),
    ("ham", "Could you send me the invoice for last month?"),
];

fn main() -> spamfold::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spamfold=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║          Spam Filtering with K-Fold Cross-Validation         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    // =========================================================================
    // 1. Configuration
    // =========================================================================
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading configuration");
            let json = std::fs::read_to_string(&path)
                .map_err(|e| SpamfoldError::Other(format!("cannot read {path}: {e}")))?;
            PipelineConfig::from_json(&json)?
        }
        None => PipelineConfig::new()
            .with_n_folds(4)
            .with_max_vocabulary_size(40)
            .with_random_state(42),
    };
    println!("⚙️  Configuration");
    println!("{}\n", config.to_json()?);

    // =========================================================================
    // 2. Corpus
    // =========================================================================
    let labels = CORPUS
        .iter()
        .map(|(label, _)| parse_label(label))
        .collect::<spamfold::Result<Vec<bool>>>()?;
    let texts: Vec<&str> = CORPUS.iter().map(|(_, text)| *text).collect();
    let spam = labels.iter().filter(|&&l| l).count();
    println!("📊 Corpus: {} emails ({} spam, {} ham)\n", texts.len(), spam, texts.len() - spam);

    // =========================================================================
    // 3. Features
    // =========================================================================
    let stop_words = StopWordsFilter::english();
    let documents = tokenize_corpus(&texts, &WordTokenizer::new(), Some(&stop_words))?;

    let pipeline = SpamPipeline::new(config.clone());
    let (vocabulary, vectors) = pipeline.vectorize(&documents)?;
    println!("🔤 Vocabulary: {} tokens", vocabulary.len());
    let top: Vec<&str> = vocabulary.iter().take(8).map(|(token, _)| token).collect();
    println!("   Most frequent: {}", top.join(", "));
    println!(
        "   First email: {} distinct in-vocabulary tokens\n",
        vectors[0].nnz()
    );

    // =========================================================================
    // 4. Cross-validation
    // =========================================================================
    let report = pipeline.evaluate(&documents, &labels, MajorityClassifier::new)?;
    println!("📈 K-Fold ({} folds)", report.cv.scores.len());
    for (i, score) in report.cv.scores.iter().enumerate() {
        println!("   Fold {}: {:.3}", i + 1, score);
    }
    println!(
        "   Mean accuracy: {:.3} ± {:.3}\n",
        report.mean_accuracy(),
        report.cv.std()
    );

    let stratified = SpamPipeline::new(config.with_stratified(true));
    let report = stratified.evaluate(&documents, &labels, MajorityClassifier::new)?;
    println!("📈 Stratified K-Fold ({} folds)", report.cv.scores.len());
    println!(
        "   Mean accuracy: {:.3} (min {:.3}, max {:.3})\n",
        report.mean_accuracy(),
        report.cv.min(),
        report.cv.max()
    );

    // =========================================================================
    // 5. Baseline on the full corpus
    // =========================================================================
    let mut model = MajorityClassifier::new();
    model.fit(&vectors, &labels)?;
    let predictions = model.predict(&vectors)?;
    let counts = ConfusionCounts::from_predictions(&predictions, &labels)?;
    println!("🎯 Majority baseline on training data");
    println!(
        "   Precision: {:.3}  Recall: {:.3}  F1: {:.3}",
        counts.precision(),
        counts.recall(),
        counts.f1()
    );

    Ok(())
}
