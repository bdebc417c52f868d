//! Analogy Resolver
//!
//! Completes "a is to b as c is to ?" queries by exhaustive nearest-neighbor
//! search over the vocabulary: the candidate whose offset from `c` is most
//! cosine-similar to `b - a` wins.
//!
//! Only `c` itself is excluded from candidacy. `a`, `b`, and their synonyms
//! stay eligible, so a degenerate query can answer with one of its own input
//! terms. That weakness is deliberate and kept; see the tests.

use tracing::debug;

use crate::error::{Result, VexaError};
use crate::math::{cosine_similarity_with_norm, norm, sub};
use crate::store::EmbeddingStore;

/// Find the best completion word for an analogy query.
///
/// Inputs are lowercased before lookup. Fails with `UnknownWord` if any of
/// the three query words is absent, and with `EmptyVocabulary` if the
/// vocabulary minus `word_c` holds no candidates. Exact score ties resolve
/// to the candidate encountered first in vocabulary order.
pub fn complete_analogy(
    word_a: &str,
    word_b: &str,
    word_c: &str,
    store: &EmbeddingStore,
) -> Result<String> {
    let word_a = word_a.to_lowercase();
    let word_b = word_b.to_lowercase();
    let word_c = word_c.to_lowercase();

    let vec_a = store.get(&word_a)?;
    let vec_b = store.get(&word_b)?;
    let vec_c = store.get(&word_c)?;

    let diff = sub(vec_b, vec_a);
    let diff_norm = norm(&diff);

    let mut best: Option<(&str, f64)> = None;
    for (word, vector) in store.vocabulary() {
        if word == word_c {
            continue;
        }
        let score = cosine_similarity_with_norm(&diff, diff_norm, &sub(vector, vec_c));
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((word, score)),
        }
    }

    let (winner, score) = best.ok_or(VexaError::EmptyVocabulary)?;
    debug!(%word_a, %word_b, %word_c, winner, score, "analogy resolved");
    Ok(winner.to_string())
}

/// Parallel variant of [`complete_analogy`].
///
/// Partitions the vocabulary into contiguous chunks across scoped worker
/// threads and reduces with a deterministic tie-break: on exact score ties
/// the lowest vocabulary index wins, so the answer always matches the
/// sequential scan. `workers == 0` auto-detects from the CPU count.
pub fn complete_analogy_parallel(
    word_a: &str,
    word_b: &str,
    word_c: &str,
    store: &EmbeddingStore,
    workers: usize,
) -> Result<String> {
    let word_a = word_a.to_lowercase();
    let word_b = word_b.to_lowercase();
    let word_c = word_c.to_lowercase();

    let vec_a = store.get(&word_a)?;
    let vec_b = store.get(&word_b)?;
    let vec_c = store.get(&word_c)?;

    let diff = sub(vec_b, vec_a);
    let diff_norm = norm(&diff);

    let entries: Vec<(&str, &[f64])> = store.vocabulary().collect();
    let workers = if workers == 0 { num_cpus::get() } else { workers };
    let workers = workers.max(1);
    let chunk_size = entries.len().div_ceil(workers).max(1);

    let best = crossbeam::scope(|scope| {
        let mut handles = Vec::new();
        for (chunk_no, chunk) in entries.chunks(chunk_size).enumerate() {
            let diff = &diff;
            let word_c = &word_c;
            let base = chunk_no * chunk_size;
            handles.push(scope.spawn(move |_| {
                let mut local: Option<(usize, f64)> = None;
                for (offset, (word, vector)) in chunk.iter().enumerate() {
                    if *word == word_c.as_str() {
                        continue;
                    }
                    let score =
                        cosine_similarity_with_norm(diff, diff_norm, &sub(vector, vec_c));
                    match local {
                        Some((_, best_score)) if score <= best_score => {}
                        _ => local = Some((base + offset, score)),
                    }
                }
                local
            }));
        }

        let mut best: Option<(usize, f64)> = None;
        for handle in handles {
            let Some((idx, score)) = handle.join().expect("analogy worker panicked") else {
                continue;
            };
            best = match best {
                None => Some((idx, score)),
                Some((best_idx, best_score)) => {
                    if score > best_score || (score == best_score && idx < best_idx) {
                        Some((idx, score))
                    } else {
                        Some((best_idx, best_score))
                    }
                }
            };
        }
        best
    })
    .expect("analogy worker panicked");

    let (idx, score) = best.ok_or(VexaError::EmptyVocabulary)?;
    let (winner, _) = entries[idx];
    debug!(%word_a, %word_b, %word_c, winner, score, workers, "analogy resolved (parallel)");
    Ok(winner.to_string())
}
