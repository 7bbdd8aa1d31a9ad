//! Bounded top-k selection — handles f32 ordering for BinaryHeap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::index::SearchResult;

/// Min-oriented wrapper so the BinaryHeap (a max-heap) keeps the WORST
/// candidate on top. Score ties fall back to id so the ordering is total;
/// NaN compares as equal and never wins a replacement.
#[derive(Debug)]
struct MinScored(SearchResult);

impl PartialEq for MinScored {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinScored {}

impl PartialOrd for MinScored {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinScored {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .score
            .partial_cmp(&self.0.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

/// A fixed-capacity queue that keeps the k highest-scoring candidates seen.
///
/// While under capacity every candidate is kept; once full, the current
/// minimum is evicted only for a strictly higher score. Heap operations
/// stay O(log k) regardless of how many candidates are offered.
#[derive(Debug)]
pub struct TopK {
    k: usize,
    heap: BinaryHeap<MinScored>,
}

impl TopK {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k),
        }
    }

    /// Offer a candidate. The id is only allocated if the candidate is kept.
    pub fn push(&mut self, id: &str, score: f32) {
        if self.heap.len() < self.k {
            self.heap.push(MinScored(SearchResult {
                id: id.to_string(),
                score,
            }));
            return;
        }

        if let Some(min) = self.heap.peek() {
            if score > min.0.score {
                self.heap.pop();
                self.heap.push(MinScored(SearchResult {
                    id: id.to_string(),
                    score,
                }));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drain into a best-first (descending score) Vec.
    pub fn into_sorted_results(self) -> Vec<SearchResult> {
        // into_sorted_vec is ascending in MinScored order, which is
        // descending by score: best-first without an extra reverse.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|m| m.0)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_all_under_capacity() {
        let mut q = TopK::new(5);
        q.push("a", 1.0);
        q.push("b", 3.0);
        q.push("c", 2.0);

        let out = q.into_sorted_results();
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].id, "b");
        assert_eq!(out[1].id, "c");
        assert_eq!(out[2].id, "a");
    }

    #[test]
    fn test_evicts_minimum_when_full() {
        let mut q = TopK::new(2);
        q.push("a", 1.0);
        q.push("b", 2.0);
        q.push("c", 3.0);

        let out = q.into_sorted_results();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "c");
        assert_eq!(out[1].id, "b");
    }

    #[test]
    fn test_equal_score_does_not_replace() {
        let mut q = TopK::new(1);
        q.push("first", 1.0);
        q.push("tied", 1.0);

        let out = q.into_sorted_results();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "first");
    }

    #[test]
    fn test_best_first_order() {
        let mut q = TopK::new(4);
        for (id, score) in [("a", -2.0), ("b", 5.0), ("c", 0.0), ("d", 3.5)] {
            q.push(id, score);
        }
        let out = q.into_sorted_results();
        let scores: Vec<f32> = out.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![5.0, 3.5, 0.0, -2.0]);
    }
}
