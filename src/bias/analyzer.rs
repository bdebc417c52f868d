//! Bias Axis Construction and Scoring
//!
//! A bias axis is a semantic direction derived from one or more contrastive
//! word pairs, e.g. `vec("woman") - vec("man")` for the gender direction.
//! Scoring a word against the axis is plain cosine similarity. Both
//! operations are pure functions over the store.

use crate::error::{Result, VexaError};
use crate::math::{cosine_similarity, mean, sub};
use crate::store::EmbeddingStore;

/// Build a bias axis from contrastive `(positive, negative)` word pairs.
///
/// Each pair contributes `vec(positive) - vec(negative)`; multiple pairs are
/// averaged element-wise. An empty pair list has no direction and fails with
/// `DegenerateAxis`.
pub fn bias_axis(pairs: &[(&str, &str)], store: &EmbeddingStore) -> Result<Vec<f64>> {
    if pairs.is_empty() {
        return Err(VexaError::DegenerateAxis("no word pairs given"));
    }

    let mut diffs = Vec::with_capacity(pairs.len());
    for (pos, neg) in pairs {
        let vec_pos = store.get(pos)?;
        let vec_neg = store.get(neg)?;
        diffs.push(sub(vec_pos, vec_neg));
    }

    Ok(mean(&diffs))
}

/// Cosine similarity of a word's embedding against a bias axis.
pub fn score_against_axis(word: &str, axis: &[f64], store: &EmbeddingStore) -> Result<f64> {
    let vector = store.get(word)?;
    Ok(cosine_similarity(vector, axis))
}
