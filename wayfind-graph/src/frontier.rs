//! Frontier for the Dijkstra algorithm.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::numtraits::Weight;

/// Frontier for the Dijkstra algorithm.
///
/// A min-queue of candidate paths: the entry with the lowest cost is
/// extracted first, entries of equal cost in insertion order. Each entry
/// carries the full path prefix leading to its node, so no predecessor
/// bookkeeping is needed once the goal is extracted. Entries are never
/// updated in place; superseded ones are discarded by the search loop.
pub(super) struct Frontier<T, W> {
    heap: BinaryHeap<Entry<T, W>>,
    next_seq: u64,
}

struct Entry<T, W> {
    cost: W,
    seq: u64,
    node: T,
    path: Vec<T>,
}

impl<T, W: Weight> Entry<T, W> {
    /// Sorts by cost, then by insertion sequence.
    fn key(&self) -> (W::OrdKey, u64) {
        (self.cost.ord_key(), self.seq)
    }
}

impl<T, W: Weight> PartialEq for Entry<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T, W: Weight> Eq for Entry<T, W> {}

impl<T, W: Weight> PartialOrd for Entry<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, W: Weight> Ord for Entry<T, W> {
    /// Reversed comparison, so the std max-heap behaves as a min-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl<T, W: Weight> Frontier<T, W> {
    /// Create new empty instance.
    pub fn new() -> Frontier<T, W> {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert a candidate path with its accumulated cost.
    pub fn push(&mut self, cost: W, node: T, path: Vec<T>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { cost, seq, node, path });
    }

    /// Extract the cheapest candidate.
    pub fn pop(&mut self) -> Option<(W, T, Vec<T>)> {
        self.heap.pop().map(|e| (e.cost, e.node, e.path))
    }
}

#[test]
fn test_push_pop() {
    let mut f = Frontier::new();
    assert!(f.pop().is_none());

    f.push(1.0, "N", vec!["N"]);
    assert_eq!(f.pop(), Some((1.0, "N", vec!["N"])));
    assert_eq!(f.pop(), None);

    f.push(2.0, "B", vec!["A", "B"]);
    f.push(1.0, "A", vec!["A"]);
    assert_eq!(f.pop(), Some((1.0, "A", vec!["A"])));
    assert_eq!(f.pop(), Some((2.0, "B", vec!["A", "B"])));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_equal_cost_pops_in_insertion_order() {
    let mut f = Frontier::new();
    f.push(1.0, "X", vec!["X"]);
    f.push(1.0, "Y", vec!["Y"]);
    f.push(0.5, "Z", vec!["Z"]);
    assert_eq!(f.pop().map(|(_, n, _)| n), Some("Z"));
    assert_eq!(f.pop().map(|(_, n, _)| n), Some("X"));
    assert_eq!(f.pop().map(|(_, n, _)| n), Some("Y"));
    assert!(f.pop().is_none());
}
