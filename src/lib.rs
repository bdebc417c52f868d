//! VEXA - Word Embedding Bias Analysis Toolkit
//!
//! A single-process numeric library over an in-memory word-to-vector store:
//! cosine similarity, analogy completion by exhaustive nearest-neighbor
//! search, bias-axis scoring, and hard debiasing (neutralize/equalize).
//!
//! The store is loaded once and read-only afterwards; every analysis
//! operation is a pure function returning fresh values. Display formatting
//! (4-decimal rounding) is a presentation concern left to callers.

pub mod analogy;
pub mod bias;
pub mod error;
pub mod math;
pub mod store;

pub use analogy::{complete_analogy, complete_analogy_parallel};
pub use bias::{bias_axis, equalize, neutralize, score_against_axis};
pub use error::{Result, VexaError};
pub use store::EmbeddingStore;
