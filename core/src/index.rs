use crate::document::Document;

/// Number of buckets. Fixed for the index's lifetime; the table chains on
/// collision and never resizes.
const BUCKETS: usize = 2503;

/// Additive character-code hash. Deliberately weak (anagram titles collide);
/// chains absorb the collisions and every operation compares full titles, so
/// only bucket distribution depends on it, not correctness.
fn bucket_of(title: &str) -> usize {
    let sum: u64 = title.chars().map(|c| c as u64).sum();
    (sum % BUCKETS as u64) as usize
}

struct Entry {
    doc: Document,
    /// Next entry in this title's bucket chain (collision chain).
    next_in_bucket: Option<usize>,
    /// Next entry in the master-order chain (reverse insertion order).
    next_in_order: Option<usize>,
}

enum Slot {
    Occupied(Entry),
    Vacant { next_free: Option<usize> },
}

/// A separate-chaining hash table from article title to article, with a
/// second chain threading every entry in reverse-insertion order so the full
/// corpus can be walked without scanning buckets.
///
/// Entries live in an arena of slots addressed by stable indices; both
/// chains store indices rather than pointers, and removed slots are recycled
/// through a free list. Iteration borrows the index, so the compiler rejects
/// mutation while a traversal is in flight.
pub struct DocumentIndex {
    buckets: Vec<Option<usize>>,
    slots: Vec<Slot>,
    order_head: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl Default for DocumentIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentIndex {
    pub fn new() -> Self {
        Self {
            buckets: vec![None; BUCKETS],
            slots: Vec::new(),
            order_head: None,
            free_head: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn entry(&self, idx: usize) -> &Entry {
        match &self.slots[idx] {
            Slot::Occupied(e) => e,
            Slot::Vacant { .. } => unreachable!("chain references a vacant slot"),
        }
    }

    fn entry_mut(&mut self, idx: usize) -> &mut Entry {
        match &mut self.slots[idx] {
            Slot::Occupied(e) => e,
            Slot::Vacant { .. } => unreachable!("chain references a vacant slot"),
        }
    }

    fn alloc(&mut self, entry: Entry) -> usize {
        match self.free_head {
            Some(idx) => {
                self.free_head = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("free list references an occupied slot"),
                };
                self.slots[idx] = Slot::Occupied(entry);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(entry));
                self.slots.len() - 1
            }
        }
    }

    /// Insert a document. A duplicate title is silently ignored: the first
    /// insertion wins and the stored body is left untouched. New entries go
    /// to the tail of their bucket chain and the head of the master-order
    /// chain, so iteration sees most-recently-inserted articles first.
    pub fn insert(&mut self, doc: Document) {
        if self.contains(&doc.title) {
            return;
        }
        let bucket = bucket_of(&doc.title);
        let idx = self.alloc(Entry {
            doc,
            next_in_bucket: None,
            next_in_order: self.order_head,
        });
        self.order_head = Some(idx);

        match self.buckets[bucket] {
            None => self.buckets[bucket] = Some(idx),
            Some(head) => {
                let mut tail = head;
                while let Some(next) = self.entry(tail).next_in_bucket {
                    tail = next;
                }
                self.entry_mut(tail).next_in_bucket = Some(idx);
            }
        }
        self.len += 1;
    }

    /// Remove the document with this exact title, unlinking it from its
    /// bucket chain and the master-order chain in one step. Removing an
    /// absent title is a no-op, not an error. Colliding entries in the same
    /// bucket are untouched; only the exact title match goes.
    pub fn remove(&mut self, title: &str) {
        let bucket = bucket_of(title);

        let mut prev: Option<usize> = None;
        let mut cur = self.buckets[bucket];
        while let Some(idx) = cur {
            if self.entry(idx).doc.title == title {
                let next = self.entry(idx).next_in_bucket;
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(p) => self.entry_mut(p).next_in_bucket = next,
                }
                self.unlink_order(idx);
                self.slots[idx] = Slot::Vacant { next_free: self.free_head };
                self.free_head = Some(idx);
                self.len -= 1;
                return;
            }
            prev = cur;
            cur = self.entry(idx).next_in_bucket;
        }
    }

    fn unlink_order(&mut self, target: usize) {
        let mut prev: Option<usize> = None;
        let mut cur = self.order_head;
        while let Some(idx) = cur {
            if idx == target {
                let next = self.entry(idx).next_in_order;
                match prev {
                    None => self.order_head = next,
                    Some(p) => self.entry_mut(p).next_in_order = next,
                }
                return;
            }
            prev = cur;
            cur = self.entry(idx).next_in_order;
        }
        unreachable!("entry missing from the master-order chain");
    }

    /// Exact-title lookup: hash, then scan the bucket chain comparing full
    /// titles.
    pub fn lookup(&self, title: &str) -> Option<&Document> {
        let mut cur = self.buckets[bucket_of(title)];
        while let Some(idx) = cur {
            let entry = self.entry(idx);
            if entry.doc.title == title {
                return Some(&entry.doc);
            }
            cur = entry.next_in_bucket;
        }
        None
    }

    pub fn contains(&self, title: &str) -> bool {
        self.lookup(title).is_some()
    }

    /// Walk the whole corpus in master order (most recently inserted first).
    pub fn iter(&self) -> Iter<'_> {
        Iter { index: self, cursor: self.order_head }
    }
}

pub struct Iter<'a> {
    index: &'a DocumentIndex,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Document;

    fn next(&mut self) -> Option<&'a Document> {
        let idx = self.cursor?;
        let entry = self.index.entry(idx);
        self.cursor = entry.next_in_order;
        Some(&entry.doc)
    }
}

impl<'a> IntoIterator for &'a DocumentIndex {
    type Item = &'a Document;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(title: &str, body: &str) -> Document {
        Document::new(title, body)
    }

    #[test]
    fn anagram_titles_share_a_bucket() {
        assert_eq!(bucket_of("Cars"), bucket_of("Cras"));
        assert_ne!(bucket_of("Cars"), bucket_of("The Beatles"));
    }

    #[test]
    fn colliding_titles_are_distinct_entries() {
        let mut index = DocumentIndex::new();
        index.insert(doc("Cars", "wheels are nice"));
        index.insert(doc("Cras", "an anagram, not a typo"));
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("Cars").unwrap().body, "wheels are nice");
        assert_eq!(index.lookup("Cras").unwrap().body, "an anagram, not a typo");
    }

    #[test]
    fn remove_from_collided_bucket_keeps_the_other() {
        let mut index = DocumentIndex::new();
        index.insert(doc("Cars", "a"));
        index.insert(doc("Cras", "b"));
        index.remove("Cars");
        assert!(!index.contains("Cars"));
        assert!(index.contains("Cras"));
    }

    #[test]
    fn slots_are_recycled_after_removal() {
        let mut index = DocumentIndex::new();
        index.insert(doc("A", "1"));
        index.insert(doc("B", "2"));
        index.remove("A");
        index.insert(doc("C", "3"));
        assert_eq!(index.slots.len(), 2);
        assert_eq!(index.len(), 2);
        let titles: Vec<_> = index.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B"]);
    }

    #[test]
    fn iteration_is_reverse_insertion_order() {
        let mut index = DocumentIndex::new();
        for t in ["A", "B", "C", "D", "E"] {
            index.insert(doc(t, "body"));
        }
        let titles: Vec<_> = index.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["E", "D", "C", "B", "A"]);
    }
}
