//! Similarity Functions
//!
//! Dot product, L2 norm, cosine similarity, and the small vector arithmetic
//! the analysis layers are built on. All functions are pure and allocate new
//! vectors instead of mutating inputs.

/// Norms at or below this are treated as zero when dividing.
pub const NORM_EPSILON: f64 = 1e-32;

/// Compute dot product of two vectors
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Compute L2 norm of a vector
#[inline]
pub fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Compute cosine similarity between two vectors
///
/// Returns a value in [-1, 1] where 1 means identical direction.
/// Element-wise identical inputs return exactly 1.0 so the trivial case is
/// immune to floating-point drift. If either norm is indistinguishable from
/// zero the function returns 0.0 instead of dividing.
#[inline]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    cosine_similarity_with_norm(a, norm(a), b)
}

/// Cosine similarity with a precomputed norm for the first argument.
///
/// Used when scanning a whole vocabulary against one fixed reference vector,
/// so the reference norm is computed once instead of per candidate.
#[inline]
pub fn cosine_similarity_with_norm(a: &[f64], norm_a: f64, b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

    if a == b {
        return 1.0;
    }

    let norm_b = norm(b);
    if norm_a <= NORM_EPSILON || norm_b <= NORM_EPSILON {
        return 0.0;
    }

    dot(a, b) / (norm_a * norm_b)
}

/// Element-wise sum, producing a new vector
#[inline]
pub fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

/// Element-wise difference, producing a new vector
#[inline]
pub fn sub(a: &[f64], b: &[f64]) -> Vec<f64> {
    debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");
    a.iter().zip(b.iter()).map(|(x, y)| x - y).collect()
}

/// Scale by a constant, producing a new vector
#[inline]
pub fn scale(v: &[f64], s: f64) -> Vec<f64> {
    v.iter().map(|x| x * s).collect()
}

/// Element-wise mean over a non-empty set of equal-dimension vectors
pub fn mean(vectors: &[Vec<f64>]) -> Vec<f64> {
    debug_assert!(!vectors.is_empty(), "mean of zero vectors");
    let dim = vectors[0].len();
    let mut acc = vec![0.0; dim];
    for v in vectors {
        debug_assert_eq!(v.len(), dim, "Vector dimensions must match");
        for (a, x) in acc.iter_mut().zip(v.iter()) {
            *a += x;
        }
    }
    let n = vectors.len() as f64;
    for a in acc.iter_mut() {
        *a /= n;
    }
    acc
}

/// Round to 4 decimal places for display.
///
/// Presentation boundary only; internal computation keeps full precision.
#[inline]
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert!((dot(&a, &b) - 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_norm() {
        assert!((norm(&[3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert_eq!(norm(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_self_is_exactly_one() {
        let a = vec![0.1, -0.7, 3.3, 2.2];
        assert_eq!(cosine_similarity(&a, &a), 1.0);
    }

    #[test]
    fn test_cosine_negation_is_minus_one() {
        let a = vec![1.0, -2.0, 3.0];
        let neg: Vec<f64> = a.iter().map(|x| -x).collect();
        assert!((cosine_similarity(&a, &neg) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_symmetry() {
        let a = vec![0.3, 1.7, -2.1];
        let b = vec![-1.0, 0.4, 0.9];
        assert!((cosine_similarity(&a, &b) - cosine_similarity(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_positive_scale_invariance() {
        let a = vec![0.5, -1.5, 2.0];
        let b = vec![1.0, 1.0, -0.5];
        let base = cosine_similarity(&a, &b);
        let scaled = cosine_similarity(&scale(&a, 3.0), &scale(&b, 0.25));
        assert!((base - scaled).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_disjoint_support_is_zero() {
        let p = vec![1.0, 0.0, 2.0, 0.0];
        let q = vec![0.0, 3.0, 0.0, 4.0];
        assert!(cosine_similarity(&p, &q).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_zero_norm_guard() {
        let z = vec![0.0, 0.0, 0.0];
        let a = vec![1.0, 2.0, 3.0];
        assert_eq!(cosine_similarity(&z, &a), 0.0);
        assert_eq!(cosine_similarity(&a, &z), 0.0);
    }

    #[test]
    fn test_cosine_with_precomputed_norm_matches() {
        let a = vec![0.2, -0.9, 1.4];
        let b = vec![1.1, 0.3, -0.6];
        let direct = cosine_similarity(&a, &b);
        let precomputed = cosine_similarity_with_norm(&a, norm(&a), &b);
        assert!((direct - precomputed).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic_helpers() {
        let a = vec![1.0, 2.0];
        let b = vec![3.0, 5.0];
        assert_eq!(add(&a, &b), vec![4.0, 7.0]);
        assert_eq!(sub(&b, &a), vec![2.0, 3.0]);
        assert_eq!(scale(&a, 2.0), vec![2.0, 4.0]);
        assert_eq!(mean(&[a, b]), vec![2.0, 3.5]);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.890_949), 0.8909);
        assert_eq!(round4(0.330_84), 0.3308);
        assert_eq!(round4(-0.000_04), 0.0);
    }
}
