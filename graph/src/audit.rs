//! Diagnostic audit of a built graph.
//!
//! Construction checks shape only. The audit reports the two conditions the
//! search assumes away: edges whose target is not a node of the graph, and
//! negative edge costs. Findings are advisory and never block a search.

use crate::model::Graph;

/// A condition worth surfacing to whoever supplied the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphFinding {
    /// `from` has an edge to `to`, which is not a node of the graph.
    /// Searches never traverse such an edge.
    DanglingNeighbor { from: String, to: String },
    /// `from → to` has a negative cost. Uniform-cost search results are
    /// unspecified for graphs with negative edges.
    NegativeCost { from: String, to: String, cost: f64 },
}

impl Graph {
    /// Scan every edge and report dangling targets and negative costs,
    /// in `(from, to)` order.
    #[must_use]
    pub fn audit(&self) -> Vec<GraphFinding> {
        let mut findings = Vec::new();
        for node in self.nodes() {
            for (to, cost) in node.neighbors() {
                if !self.contains(to) {
                    findings.push(GraphFinding::DanglingNeighbor {
                        from: node.id().to_string(),
                        to: to.to_string(),
                    });
                }
                if cost < 0.0 {
                    findings.push(GraphFinding::NegativeCost {
                        from: node.id().to_string(),
                        to: to.to_string(),
                        cost,
                    });
                }
            }
        }
        if !findings.is_empty() {
            tracing::debug!(findings = findings.len(), "graph audit found issues");
        }
        findings
    }
}
