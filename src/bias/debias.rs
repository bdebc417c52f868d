//! Debiasing
//!
//! Hard-debiasing operations over a bias axis: neutralization removes a
//! single word's component along the axis; equalization re-positions a
//! symmetric word pair so both end up equidistant from, and symmetric
//! about, the subspace orthogonal to the axis.
//!
//! Stored embeddings are never modified; both operations return fresh
//! vectors.

use crate::error::{Result, VexaError};
use crate::math::{add, dot, norm, scale, sub, NORM_EPSILON};
use crate::store::EmbeddingStore;

/// Projection of `v` onto `axis`: `(dot(v, axis) / dot(axis, axis)) * axis`.
///
/// Caller guarantees the axis is non-degenerate.
fn project(v: &[f64], axis: &[f64], axis_sq: f64) -> Vec<f64> {
    scale(axis, dot(v, axis) / axis_sq)
}

/// Remove a word's bias component along the axis.
///
/// Returns `vec(word) - proj_axis(vec(word))`. The result has cosine
/// similarity ~0 against the axis. Fails with `DegenerateAxis` when the
/// axis has numerically zero magnitude.
pub fn neutralize(word: &str, axis: &[f64], store: &EmbeddingStore) -> Result<Vec<f64>> {
    let vector = store.get(word)?;

    let axis_sq = dot(axis, axis);
    if axis_sq <= NORM_EPSILON {
        return Err(VexaError::DegenerateAxis("axis has zero magnitude"));
    }

    let bias_component = project(vector, axis, axis_sq);
    Ok(sub(vector, &bias_component))
}

/// Equalize a symmetric word pair across the bias axis.
///
/// Both outputs carry equal-magnitude, opposite-sign components along the
/// axis and share the pair midpoint's orthogonal part. Fails with
/// `DegenerateAxis` when the axis is zero or a correction denominator
/// vanishes (e.g. the two words have identical embeddings).
pub fn equalize(
    pair: (&str, &str),
    axis: &[f64],
    store: &EmbeddingStore,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let e1 = store.get(pair.0)?;
    let e2 = store.get(pair.1)?;

    let axis_sq = dot(axis, axis);
    if axis_sq <= NORM_EPSILON {
        return Err(VexaError::DegenerateAxis("axis has zero magnitude"));
    }

    let mu = scale(&add(e1, e2), 0.5);
    let mu_b = project(&mu, axis, axis_sq);
    let e1_b = project(e1, axis, axis_sq);
    let e2_b = project(e2, axis, axis_sq);
    let mu_orth = sub(&mu, &mu_b);

    let correction_scale = (1.0 - norm(&mu_orth).powi(2)).abs().sqrt();

    let corrected_toward = |e: &[f64], e_b: &[f64]| -> Result<Vec<f64>> {
        let denom = norm(&sub(&sub(e, &mu_orth), &mu_b));
        if denom <= NORM_EPSILON {
            return Err(VexaError::DegenerateAxis("correction denominator is zero"));
        }
        Ok(scale(&sub(e_b, &mu_b), correction_scale / denom))
    };

    let corrected1 = corrected_toward(e1, &e1_b)?;
    let corrected2 = corrected_toward(e2, &e2_b)?;

    Ok((add(&corrected1, &mu_orth), add(&corrected2, &mu_orth)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bias::bias_axis;
    use crate::math::cosine_similarity;
    use std::io::Cursor;

    fn test_store() -> EmbeddingStore {
        let source = "\
man 0.9 0.1 0.3 0.0
woman -0.9 0.1 0.3 0.0
receptionist -0.4 0.6 0.2 0.1
actor 0.5 0.3 -0.2 0.4
actress -0.5 0.3 -0.2 0.4
twin_a 0.2 0.5 0.1 0.0
twin_b 0.2 0.5 0.1 0.0
";
        EmbeddingStore::load(Cursor::new(source)).unwrap()
    }

    #[test]
    fn test_neutralize_is_orthogonal_to_axis() {
        let store = test_store();
        let axis = bias_axis(&[("woman", "man")], &store).unwrap();

        let before = cosine_similarity(store.get("receptionist").unwrap(), &axis);
        assert!(before.abs() > 0.1);

        let neutralized = neutralize("receptionist", &axis, &store).unwrap();
        assert!(cosine_similarity(&neutralized, &axis).abs() < 1e-6);
    }

    #[test]
    fn test_neutralize_degenerate_axis() {
        let store = test_store();
        let zero_axis = vec![0.0; store.dimension()];
        let err = neutralize("receptionist", &zero_axis, &store).unwrap_err();
        assert!(matches!(err, VexaError::DegenerateAxis(_)));
    }

    #[test]
    fn test_equalize_symmetric_about_axis() {
        let store = test_store();
        let axis = bias_axis(&[("woman", "man")], &store).unwrap();

        let (e1, e2) = equalize(("actor", "actress"), &axis, &store).unwrap();
        let s1 = cosine_similarity(&e1, &axis);
        let s2 = cosine_similarity(&e2, &axis);
        // Equal magnitude, opposite sign.
        assert!((s1 + s2).abs() < 1e-9);
        assert!(s1.abs() > 1e-6);
    }

    #[test]
    fn test_equalize_preserves_orthogonal_midpoint() {
        let store = test_store();
        let axis = bias_axis(&[("woman", "man")], &store).unwrap();

        let (e1, e2) = equalize(("actor", "actress"), &axis, &store).unwrap();
        let mid = scale(&add(&e1, &e2), 0.5);
        // The shared part of both outputs is orthogonal to the axis.
        assert!(cosine_similarity(&mid, &axis).abs() < 1e-9);
    }

    #[test]
    fn test_equalize_degenerate_axis() {
        let store = test_store();
        let zero_axis = vec![0.0; store.dimension()];
        let err = equalize(("actor", "actress"), &zero_axis, &store).unwrap_err();
        assert!(matches!(err, VexaError::DegenerateAxis(_)));
    }

    #[test]
    fn test_equalize_identical_pair_is_degenerate() {
        let store = test_store();
        let axis = bias_axis(&[("woman", "man")], &store).unwrap();
        let err = equalize(("twin_a", "twin_b"), &axis, &store).unwrap_err();
        assert!(matches!(err, VexaError::DegenerateAxis(_)));
    }

    #[test]
    fn test_equalize_unknown_word() {
        let store = test_store();
        let axis = bias_axis(&[("woman", "man")], &store).unwrap();
        let err = equalize(("actor", "android"), &axis, &store).unwrap_err();
        assert!(matches!(err, VexaError::UnknownWord(w) if w == "android"));
    }
}
