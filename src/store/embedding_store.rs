//! Embedding Store
//!
//! Parses the plain-text embedding format (`word v1 v2 ... vD`, one record
//! per line) into an in-memory store. Lookup goes through a hash index into
//! a contiguous array of vectors; iteration follows source-file order, so a
//! loaded store is deterministic across traversals.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use tracing::{debug, info};

use crate::error::{Result, VexaError};

/// Read-only word-to-vector store.
///
/// Keys are case-insensitive; tokens are lowercased on insert and queries
/// are lowercased on lookup. Every vector has the same dimension, enforced
/// during load. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct EmbeddingStore {
    /// Word -> index into `words`/`vectors`
    index: HashMap<String, usize>,
    /// Words in source-file order
    words: Vec<String>,
    /// Vectors in source-file order
    vectors: Vec<Vec<f64>>,
    /// Embedding dimension
    dimension: usize,
}

impl EmbeddingStore {
    /// Load a store from a whitespace-delimited text source.
    ///
    /// The first field of each line is the token, the rest are decimal
    /// floats. Dimension is fixed by the first record; any later record
    /// with a different field count, a malformed float, or a duplicate
    /// token aborts the load with a parse error. Blank lines are skipped.
    pub fn load<R: BufRead>(reader: R) -> Result<Self> {
        let mut index = HashMap::new();
        let mut words = Vec::new();
        let mut vectors: Vec<Vec<f64>> = Vec::new();
        let mut dimension = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line_no = line_no + 1;
            let line = line?;
            let mut fields = line.split_whitespace();

            let Some(token) = fields.next() else {
                continue; // blank line
            };

            let mut vector = Vec::with_capacity(dimension);
            for field in fields {
                let value: f64 = field.parse().map_err(|_| {
                    VexaError::parse(line_no, format!("malformed number {:?}", field))
                })?;
                vector.push(value);
            }

            if vector.is_empty() {
                return Err(VexaError::parse(line_no, "record has no vector fields"));
            }

            if vectors.is_empty() {
                dimension = vector.len();
            } else if vector.len() != dimension {
                return Err(VexaError::parse(
                    line_no,
                    format!("expected {} vector fields, got {}", dimension, vector.len()),
                ));
            }

            let word = token.to_lowercase();
            if index.contains_key(&word) {
                return Err(VexaError::parse(line_no, format!("duplicate token {:?}", word)));
            }

            index.insert(word.clone(), vectors.len());
            words.push(word);
            vectors.push(vector);
        }

        debug!(words = words.len(), dimension, "embedding store loaded");

        Ok(Self {
            index,
            words,
            vectors,
            dimension,
        })
    }

    /// Load a store from a file path.
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let store = Self::load(BufReader::new(file))?;
        info!(
            path = %path.display(),
            words = store.len(),
            dimension = store.dimension(),
            "loaded embeddings"
        );
        Ok(store)
    }

    /// Look up a word's vector, case-insensitively.
    pub fn get(&self, word: &str) -> Result<&[f64]> {
        let key = word.to_lowercase();
        self.index
            .get(&key)
            .map(|&i| self.vectors[i].as_slice())
            .ok_or(VexaError::UnknownWord(key))
    }

    /// Check whether a word is present, case-insensitively.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(&word.to_lowercase())
    }

    /// Embedding dimension
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the store holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate `(word, vector)` pairs in source-file order.
    ///
    /// Fresh traversal each call; order is stable for the lifetime of the
    /// store.
    pub fn vocabulary(&self) -> Vocabulary<'_> {
        Vocabulary { store: self, pos: 0 }
    }

    /// Word and vector at a vocabulary index.
    pub(crate) fn entry(&self, idx: usize) -> (&str, &[f64]) {
        (&self.words[idx], &self.vectors[idx])
    }
}

/// Iterator over a store's `(word, vector)` pairs in source-file order.
pub struct Vocabulary<'a> {
    store: &'a EmbeddingStore,
    pos: usize,
}

impl<'a> Iterator for Vocabulary<'a> {
    type Item = (&'a str, &'a [f64]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.store.words.len() {
            return None;
        }
        let (word, vector) = self.store.entry(self.pos);
        self.pos += 1;
        Some((word, vector))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.store.words.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Vocabulary<'a> {}
