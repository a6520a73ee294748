use std::time::Instant;

use crate::document::Document;
use crate::heap::MaxHeap;
use crate::index::DocumentIndex;
use crate::term_vector::similarity;
use crate::tokenizer::tokenize;

/// Minimum cosine similarity for a document to qualify as a match. Strictly
/// greater-than comparison, so NaN scores (no vocabulary overlap on one
/// side) never qualify.
pub const SCORE_THRESHOLD: f64 = 0.001;

/// Number of results a search returns at most.
pub const TOP_K: usize = 3;

/// One qualifying document with its similarity score. The score lives here,
/// next to a borrow of the indexed document, and is dropped with the query.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch<'a> {
    pub document: &'a Document,
    pub score: f64,
}

/// Outcome of a phrase search. A query with nothing above the threshold is
/// reported as `NoMatches` rather than an empty list, so callers can
/// distinguish "searched and found nothing" at the type level.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Up to `TOP_K` matches in descending score order; never empty.
    Matches(Vec<RankedMatch<'a>>),
    NoMatches,
}

/// Rank the whole corpus against a query phrase.
///
/// Tokenizes the phrase once, walks every document in master order, scores
/// each body with term-frequency cosine similarity, and keeps qualifying
/// candidates in a fresh max-heap. The heap and the per-document frequency
/// tables live only for this call; the index itself is never touched.
pub fn search<'a>(index: &'a DocumentIndex, phrase: &str) -> SearchOutcome<'a> {
    let start = Instant::now();
    let query_tokens = tokenize(phrase);

    let mut heap = MaxHeap::new();
    for doc in index.iter() {
        let body_tokens = tokenize(&doc.body);
        let score = similarity(&query_tokens, &body_tokens);
        tracing::debug!(title = %doc.title, score, "scored document");
        if score > SCORE_THRESHOLD {
            heap.insert(score, doc);
        }
    }

    let qualifying = heap.len();
    let mut matches = Vec::with_capacity(TOP_K.min(qualifying));
    while matches.len() < TOP_K {
        match heap.extract_max() {
            Some((score, document)) => matches.push(RankedMatch { document, score }),
            None => break,
        }
    }

    tracing::info!(
        corpus = index.len(),
        qualifying,
        returned = matches.len(),
        took_s = start.elapsed().as_secs_f64(),
        "phrase search complete"
    );

    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(matches)
    }
}
