//! Uniform-cost frontier with non-destructive snapshots.
//!
//! The trace records the remaining frontier on every dequeue. The heap is
//! inspected through `BinaryHeap::iter` and the borrowed entries are sorted
//! into a fresh vector, so taking a snapshot never drains or rebuilds the
//! queue.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::candidate::PathCandidate;
use crate::trace::FrontierEntry;

/// Min-priority queue of [`PathCandidate`]s.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop
/// the lowest `(cost, path)` first. The same node may be reachable through
/// several queued candidates at once.
#[derive(Debug, Default)]
pub struct UniformCostFrontier {
    heap: BinaryHeap<Reverse<PathCandidate>>,
    high_water: u64,
}

impl UniformCostFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a candidate.
    pub fn push(&mut self, candidate: PathCandidate) {
        self.heap.push(Reverse(candidate));
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove and return the lowest `(cost, path)` candidate.
    #[must_use]
    pub fn pop(&mut self) -> Option<PathCandidate> {
        self.heap.pop().map(|Reverse(c)| c)
    }

    /// The candidate [`pop`](Self::pop) would return next.
    #[must_use]
    pub fn peek(&self) -> Option<&PathCandidate> {
        self.heap.peek().map(|Reverse(c)| c)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Every queued candidate, in the order they would be popped.
    ///
    /// Leaves the frontier untouched.
    #[must_use]
    pub fn snapshot(&self) -> Vec<FrontierEntry> {
        let mut queued: Vec<&PathCandidate> = self.heap.iter().map(|Reverse(c)| c).collect();
        queued.sort_unstable();
        queued.into_iter().map(FrontierEntry::from).collect()
    }
}
