//! Vector Math
//!
//! Pure vector arithmetic and similarity primitives over `f64` slices.

mod similarity;

pub use similarity::{
    add, cosine_similarity, cosine_similarity_with_norm, dot, mean, norm, round4, scale, sub,
    NORM_EPSILON,
};
