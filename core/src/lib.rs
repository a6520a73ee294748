//! In-memory encyclopedia search core: a hash-chained title index over a
//! fixed corpus, term-frequency cosine scoring, and heap-based top-K
//! selection. The CLI crate supplies documents and renders results.

pub mod document;
pub mod heap;
pub mod index;
pub mod search;
pub mod term_vector;
pub mod tokenizer;

pub use document::Document;
pub use heap::MaxHeap;
pub use index::DocumentIndex;
pub use search::{search, RankedMatch, SearchOutcome, SCORE_THRESHOLD, TOP_K};
pub use term_vector::{cosine_similarity, similarity, TermFrequencyTable};
pub use tokenizer::{preprocess, tokenize};
