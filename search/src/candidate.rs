//! Path candidates and their frontier ordering.

use std::cmp::Ordering;

/// A `(cost, path)` pair awaiting expansion.
///
/// The path is never empty: its first element is the start node and its last
/// element is the node this candidate reaches. Construct via
/// [`PathCandidate::root`] and [`PathCandidate::extend`].
///
/// Ordering is `(cost, path)`: lower cost first (`f64::total_cmp`), ties
/// broken by lexicographic comparison of the id sequence. This is a total
/// order, so frontier pops do not depend on insertion order.
#[derive(Debug, Clone)]
pub struct PathCandidate {
    cost: f64,
    path: Vec<String>,
}

impl PathCandidate {
    /// The zero-cost candidate `[start]`.
    #[must_use]
    pub fn root(start: &str) -> Self {
        Self {
            cost: 0.0,
            path: vec![start.to_string()],
        }
    }

    /// This path extended by one edge.
    #[must_use]
    pub fn extend(&self, neighbor: &str, edge_cost: f64) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(neighbor.to_string());
        Self {
            cost: self.cost + edge_cost,
            path,
        }
    }

    /// Total cost of the path.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Node ids from start to the reached node.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The node this candidate reaches (last path element).
    #[must_use]
    pub fn last(&self) -> &str {
        self.path.last().map_or("", String::as_str)
    }

    /// Decompose into `(cost, path)`.
    #[must_use]
    pub fn into_parts(self) -> (f64, Vec<String>) {
        (self.cost, self.path)
    }
}

impl PartialEq for PathCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PathCandidate {}

impl PartialOrd for PathCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.path.cmp(&other.path))
    }
}
