/// Which side of the comparison a token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Query = 0,
    Body = 1,
}

/// Vocabulary bucket count. Much smaller than the document index table; a
/// query/document pair rarely has more than a few hundred distinct terms.
const BUCKETS: usize = 101;

fn bucket_of(term: &str) -> usize {
    let sum: u64 = term.chars().map(|c| c as u64).sum();
    (sum % BUCKETS as u64) as usize
}

struct VocabEntry {
    term: String,
    /// Frequency of this term in the query (slot 0) and the document body
    /// (slot 1).
    freq: [u32; 2],
    next_in_bucket: Option<usize>,
    next_in_order: Option<usize>,
}

/// Per-query term-frequency table: the same chained-arena technique as
/// `DocumentIndex`, keyed on term, accumulating a shared vocabulary across
/// the query and one document body. The master chain records first-seen
/// order across both streams, so the two frequency vectors read out of it
/// are always parallel: equal length, index i naming the same term.
///
/// Built fresh for every (query, document) pair and discarded afterwards;
/// slot-1 counts are specific to one body, so the table is never reused
/// across documents.
pub struct TermFrequencyTable {
    buckets: Vec<Option<usize>>,
    entries: Vec<VocabEntry>,
    order_head: Option<usize>,
    order_tail: Option<usize>,
}

impl Default for TermFrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TermFrequencyTable {
    pub fn new() -> Self {
        Self {
            buckets: vec![None; BUCKETS],
            entries: Vec::new(),
            order_head: None,
            order_tail: None,
        }
    }

    /// Number of distinct terms seen so far.
    pub fn vocab_len(&self) -> usize {
        self.entries.len()
    }

    /// Count one occurrence of `term` on the given side, inserting a
    /// zero-initialized vocabulary entry on first sight. Callers filter stop
    /// words before recording; the table counts whatever it is given.
    pub fn record(&mut self, term: &str, slot: Slot) {
        let bucket = bucket_of(term);

        let mut cur = self.buckets[bucket];
        let mut tail = None;
        while let Some(idx) = cur {
            if self.entries[idx].term == term {
                self.entries[idx].freq[slot as usize] += 1;
                return;
            }
            tail = cur;
            cur = self.entries[idx].next_in_bucket;
        }

        let mut entry = VocabEntry {
            term: term.to_owned(),
            freq: [0, 0],
            next_in_bucket: None,
            next_in_order: None,
        };
        entry.freq[slot as usize] = 1;
        self.entries.push(entry);
        let idx = self.entries.len() - 1;

        match tail {
            Some(t) => self.entries[t].next_in_bucket = Some(idx),
            None => self.buckets[bucket] = Some(idx),
        }
        match self.order_tail {
            Some(t) => self.entries[t].next_in_order = Some(idx),
            None => self.order_head = Some(idx),
        }
        self.order_tail = Some(idx);
    }

    /// Parallel frequency vectors for the query (first) and the document
    /// body (second), both in first-seen vocabulary order.
    pub fn vectors(&self) -> (Vec<u32>, Vec<u32>) {
        let mut query = Vec::with_capacity(self.entries.len());
        let mut body = Vec::with_capacity(self.entries.len());
        let mut cur = self.order_head;
        while let Some(idx) = cur {
            let entry = &self.entries[idx];
            query.push(entry.freq[0]);
            body.push(entry.freq[1]);
            cur = entry.next_in_order;
        }
        (query, body)
    }

    pub fn cosine(&self) -> f64 {
        let (query, body) = self.vectors();
        cosine_similarity(&query, &body)
    }
}

fn dot(a: &[u32], b: &[u32]) -> f64 {
    a.iter().zip(b).map(|(&x, &y)| x as f64 * y as f64).sum()
}

/// Cosine of the angle between two frequency vectors:
/// dot(a, b) / (‖a‖ · ‖b‖). When either vector is all zeros the denominator
/// is zero and the result is NaN; callers qualify candidates with
/// `score > threshold`, which is false for NaN, so zero-overlap pairs drop
/// out without any special casing.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> f64 {
    dot(a, b) / (dot(a, a).sqrt() * dot(b, b).sqrt())
}

/// Score one (query, document) pair: feed both token streams through a
/// fresh table and take the cosine.
pub fn similarity(query_tokens: &[String], body_tokens: &[String]) -> f64 {
    let mut table = TermFrequencyTable::new();
    for token in query_tokens {
        table.record(token, Slot::Query);
    }
    for token in body_tokens {
        table.record(token, Slot::Body);
    }
    table.cosine()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_owned).collect()
    }

    #[test]
    fn vectors_are_parallel_and_first_seen_ordered() {
        let mut table = TermFrequencyTable::new();
        table.record("a", Slot::Query);
        table.record("b", Slot::Query);
        table.record("a", Slot::Body);
        table.record("a", Slot::Body);
        table.record("b", Slot::Body);
        table.record("b", Slot::Body);
        let (q, d) = table.vectors();
        assert_eq!(q, vec![1, 1]);
        assert_eq!(d, vec![2, 2]);
    }

    #[test]
    fn identical_vocabulary_scores_one() {
        let score = similarity(&toks("a b"), &toks("a a b b"));
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_vocabulary_scores_zero() {
        let score = similarity(&toks("a b"), &toks("c d"));
        assert_eq!(score, 0.0);
    }

    #[test]
    fn zero_vector_side_is_nan() {
        // Empty query: its vector is all zeros, the denominator is zero.
        let score = similarity(&[], &toks("c d"));
        assert!(score.is_nan());
        // NaN never exceeds a positive threshold.
        assert!(!(score > 0.001));
    }

    #[test]
    fn cosine_is_symmetric_and_bounded() {
        let a = toks("x y y z");
        let b = toks("y z z w");
        let ab = similarity(&a, &b);
        let ba = similarity(&b, &a);
        assert!((ab - ba).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn colliding_terms_stay_distinct() {
        // Additive hash: "ab" and "ba" collide.
        let mut table = TermFrequencyTable::new();
        table.record("ab", Slot::Query);
        table.record("ba", Slot::Query);
        table.record("ab", Slot::Query);
        assert_eq!(table.vocab_len(), 2);
        let (q, _) = table.vectors();
        assert_eq!(q, vec![2, 1]);
    }
}
