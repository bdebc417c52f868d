//! VEXA CLI
//!
//! Demo driver over the analysis core. Loads an embedding file once, runs
//! one query, and formats results for display (scores rounded to 4 decimal
//! places at this boundary only).

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use vexa::math::{cosine_similarity, round4};
use vexa::{
    bias_axis, complete_analogy, complete_analogy_parallel, equalize, neutralize,
    score_against_axis, EmbeddingStore,
};

/// VEXA - Word Embedding Bias Analysis
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the embedding file (one `word v1 v2 ... vD` record per line)
    #[arg(short, long)]
    embeddings: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cosine similarity between two words
    Similarity { word1: String, word2: String },

    /// Complete the analogy "a is to b as c is to ?"
    Analogy {
        word_a: String,
        word_b: String,
        word_c: String,

        /// Partition the vocabulary scan across worker threads
        #[arg(long, default_value_t = false)]
        parallel: bool,

        /// Worker thread count for --parallel (0 = auto-detect)
        #[arg(long, default_value_t = 0)]
        workers: usize,
    },

    /// Score a word against a bias axis built from contrastive pairs
    Score {
        word: String,

        /// Positive side of a contrastive pair (repeatable, e.g. "woman")
        #[arg(long, required = true)]
        pos: Vec<String>,

        /// Negative side of a contrastive pair (repeatable, e.g. "man")
        #[arg(long, required = true)]
        neg: Vec<String>,
    },

    /// Remove a word's component along a bias axis
    Neutralize {
        word: String,

        #[arg(long, required = true)]
        pos: Vec<String>,

        #[arg(long, required = true)]
        neg: Vec<String>,
    },

    /// Equalize a symmetric word pair across a bias axis
    Equalize {
        word1: String,
        word2: String,

        #[arg(long, required = true)]
        pos: Vec<String>,

        #[arg(long, required = true)]
        neg: Vec<String>,
    },
}

fn pairs<'a>(pos: &'a [String], neg: &'a [String]) -> anyhow::Result<Vec<(&'a str, &'a str)>> {
    if pos.len() != neg.len() {
        anyhow::bail!(
            "expected matching --pos/--neg counts, got {} and {}",
            pos.len(),
            neg.len()
        );
    }
    Ok(pos
        .iter()
        .map(String::as_str)
        .zip(neg.iter().map(String::as_str))
        .collect())
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vexa=info".parse()?))
        .init();

    let args = Args::parse();
    let store = EmbeddingStore::load_path(&args.embeddings)?;

    match args.command {
        Command::Similarity { word1, word2 } => {
            let sim = cosine_similarity(store.get(&word1)?, store.get(&word2)?);
            println!(
                "cosine_similarity({}, {}) = {}",
                word1.to_lowercase(),
                word2.to_lowercase(),
                round4(sim)
            );
        }
        Command::Analogy {
            word_a,
            word_b,
            word_c,
            parallel,
            workers,
        } => {
            let answer = if parallel {
                complete_analogy_parallel(&word_a, &word_b, &word_c, &store, workers)?
            } else {
                complete_analogy(&word_a, &word_b, &word_c, &store)?
            };
            println!(
                "{} -> {} :: {} -> {}",
                word_a.to_lowercase(),
                word_b.to_lowercase(),
                word_c.to_lowercase(),
                answer
            );
        }
        Command::Score { word, pos, neg } => {
            let axis = bias_axis(&pairs(&pos, &neg)?, &store)?;
            let score = score_against_axis(&word, &axis, &store)?;
            println!("{} = {}", word.to_lowercase(), round4(score));
        }
        Command::Neutralize { word, pos, neg } => {
            let axis = bias_axis(&pairs(&pos, &neg)?, &store)?;
            let before = score_against_axis(&word, &axis, &store)?;
            let neutralized = neutralize(&word, &axis, &store)?;
            let after = cosine_similarity(&neutralized, &axis);
            println!("{} before = {}", word.to_lowercase(), round4(before));
            println!("{} after  = {}", word.to_lowercase(), round4(after));
        }
        Command::Equalize {
            word1,
            word2,
            pos,
            neg,
        } => {
            let axis = bias_axis(&pairs(&pos, &neg)?, &store)?;
            let (e1, e2) = equalize((&word1, &word2), &axis, &store)?;
            println!(
                "{} = {}",
                word1.to_lowercase(),
                round4(cosine_similarity(&e1, &axis))
            );
            println!(
                "{} = {}",
                word2.to_lowercase(),
                round4(cosine_similarity(&e2, &axis))
            );
        }
    }

    Ok(())
}
