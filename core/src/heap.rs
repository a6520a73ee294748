/// Binary max-heap keyed on a floating-point score, used to pull the top
/// scoring documents out of a query. Stored as an implicit tree in a `Vec`
/// (parent (i-1)/2, children 2i+1 and 2i+2); the vector's amortized doubling
/// is the growth strategy, and growth never drops or reorders elements
/// outside the sift path.
///
/// NaN scores must be filtered out by the caller before insertion; the
/// search layer's qualification threshold does exactly that.
pub struct MaxHeap<T> {
    items: Vec<(f64, T)>,
}

impl<T> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MaxHeap<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    /// Index of the larger child of `i`, or `None` for a leaf.
    fn max_child(&self, i: usize) -> Option<usize> {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        if left >= self.items.len() {
            None
        } else if right >= self.items.len() || self.items[left].0 > self.items[right].0 {
            Some(left)
        } else {
            Some(right)
        }
    }

    /// Append, then sift up while strictly greater than the parent. Equal
    /// scores stay put, so ties are broken arbitrarily but nothing is ever
    /// skipped or duplicated on the way back out.
    pub fn insert(&mut self, score: f64, value: T) {
        self.items.push((score, value));
        let mut i = self.items.len() - 1;
        while i > 0 && self.items[i].0 > self.items[Self::parent(i)].0 {
            self.items.swap(i, Self::parent(i));
            i = Self::parent(i);
        }
    }

    /// Remove and return the highest-scoring entry, or `None` when empty.
    /// Swaps the root with the last element, shrinks, then sifts the new
    /// root down toward the strictly-greater child, preferring the larger.
    pub fn extract_max(&mut self) -> Option<(f64, T)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let max = self.items.pop();

        let mut i = 0;
        while let Some(mc) = self.max_child(i) {
            if self.items[i].0 >= self.items[mc].0 {
                break;
            }
            self.items.swap(i, mc);
            i = mc;
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_descending_order() {
        let mut heap = MaxHeap::new();
        for (score, name) in [(0.9, "a"), (0.1, "b"), (0.5, "c"), (0.8, "d"), (0.2, "e")] {
            heap.insert(score, name);
        }
        let mut out = Vec::new();
        while let Some((score, _)) = heap.extract_max() {
            out.push(score);
        }
        assert_eq!(out, vec![0.9, 0.8, 0.5, 0.2, 0.1]);
    }

    #[test]
    fn empty_extract_is_none() {
        let mut heap: MaxHeap<&str> = MaxHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.extract_max().map(|(s, _)| s), None);
    }

    #[test]
    fn ties_are_neither_skipped_nor_duplicated() {
        let mut heap = MaxHeap::new();
        for name in ["a", "b", "c"] {
            heap.insert(0.5, name);
        }
        heap.insert(0.7, "top");
        let mut names = Vec::new();
        while let Some((_, name)) = heap.extract_max() {
            names.push(name);
        }
        assert_eq!(names[0], "top");
        let mut tied = names[1..].to_vec();
        tied.sort_unstable();
        assert_eq!(tied, vec!["a", "b", "c"]);
    }

    #[test]
    fn growth_preserves_every_element() {
        let mut heap = MaxHeap::new();
        for i in 0..1000 {
            heap.insert((i % 97) as f64, i);
        }
        assert_eq!(heap.len(), 1000);
        let mut prev = f64::INFINITY;
        let mut count = 0;
        while let Some((score, _)) = heap.extract_max() {
            assert!(score <= prev);
            prev = score;
            count += 1;
        }
        assert_eq!(count, 1000);
    }
}
