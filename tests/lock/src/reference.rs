//! Reference shortest-path oracle for property tests.
//!
//! Bellman-Ford relaxation over every edge whose target is a node of the
//! graph. Deliberately shares no code with the search loop.

use std::collections::{BTreeMap, BTreeSet};

use ucs_graph::Graph;

/// Minimum path cost from `start` to each reachable node.
#[must_use]
pub fn shortest_costs(graph: &Graph, start: &str) -> BTreeMap<String, f64> {
    let mut dist: BTreeMap<String, f64> = BTreeMap::new();
    if !graph.contains(start) {
        return dist;
    }
    dist.insert(start.to_string(), 0.0);

    for _ in 0..graph.len() {
        let mut changed = false;
        for node in graph.nodes() {
            let Some(&base) = dist.get(node.id()) else {
                continue;
            };
            for (to, cost) in node.neighbors() {
                if !graph.contains(to) {
                    continue;
                }
                let candidate = base + cost;
                let entry = dist.entry(to.to_string()).or_insert(f64::INFINITY);
                if candidate < *entry {
                    *entry = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

/// Minimum cost from `start` to any node in `goals`, if one is reachable.
#[must_use]
pub fn min_goal_cost(graph: &Graph, start: &str, goals: &BTreeSet<String>) -> Option<f64> {
    let dist = shortest_costs(graph, start);
    goals
        .iter()
        .filter_map(|goal| dist.get(goal).copied())
        .min_by(f64::total_cmp)
}
