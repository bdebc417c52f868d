//! Embedding Store
//!
//! One-time load of a word to vector mapping, read-only thereafter.

mod embedding_store;

pub use embedding_store::{EmbeddingStore, Vocabulary};
