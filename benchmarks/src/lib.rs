//! Shared helpers for the UCS benchmark suites: generated graph regimes and
//! a determinism guard checked before timing.

use std::collections::BTreeSet;

use ucs_graph::proof::hash::{canonical_hash, ContentHash};
use ucs_graph::proof::hash_domain::HashDomain;
use ucs_graph::{Graph, GraphBuilder};
use ucs_search::{search_with_policy, SearchPolicy, SearchReport};

/// A graph plus the search inputs to run on it.
pub struct Regime {
    pub name: &'static str,
    pub graph: Graph,
    pub start: String,
    pub goals: BTreeSet<String>,
    pub policy: SearchPolicy,
}

/// Deterministic pseudo-random edge cost in `1..=9`.
fn mixed_cost(a: usize, b: usize) -> f64 {
    let h = (a.wrapping_mul(31) ^ b.wrapping_mul(17)) % 9;
    f64::from(u8::try_from(h).unwrap_or(0)) + 1.0
}

fn cell(row: usize, col: usize) -> String {
    format!("r{row}c{col}")
}

/// `side × side` grid with right/down/left/up edges and mixed costs.
///
/// # Panics
///
/// Panics if graph construction fails (a generator bug).
#[must_use]
pub fn grid_graph(side: usize) -> Graph {
    let mut builder = GraphBuilder::new();
    for row in 0..side {
        for col in 0..side {
            builder = builder.node(cell(row, col), format!("{row},{col}"));
        }
    }
    for row in 0..side {
        for col in 0..side {
            let here = row * side + col;
            if col + 1 < side {
                builder = builder
                    .edge(cell(row, col), cell(row, col + 1), mixed_cost(here, here + 1))
                    .edge(cell(row, col + 1), cell(row, col), mixed_cost(here + 1, here));
            }
            if row + 1 < side {
                builder = builder
                    .edge(cell(row, col), cell(row + 1, col), mixed_cost(here, here + side))
                    .edge(cell(row + 1, col), cell(row, col), mixed_cost(here + side, here));
            }
        }
    }
    builder.build().expect("grid generator produces a valid graph")
}

/// `depth` layers of `width` nodes, each fully connected to the next layer,
/// with one sink node after the last layer.
///
/// # Panics
///
/// Panics if graph construction fails (a generator bug).
#[must_use]
pub fn layered_graph(width: usize, depth: usize) -> Graph {
    let id = |layer: usize, slot: usize| format!("l{layer}s{slot}");
    let mut builder = GraphBuilder::new().node("src", "source").node("sink", "sink");
    for layer in 0..depth {
        for slot in 0..width {
            builder = builder.node(id(layer, slot), format!("{layer}/{slot}"));
        }
    }
    for slot in 0..width {
        builder = builder
            .edge("src", id(0, slot), mixed_cost(0, slot))
            .edge(id(depth - 1, slot), "sink", mixed_cost(depth, slot));
    }
    for layer in 0..depth - 1 {
        for from in 0..width {
            for to in 0..width {
                builder = builder.edge(
                    id(layer, from),
                    id(layer + 1, to),
                    mixed_cost(layer * width + from, to),
                );
            }
        }
    }
    builder.build().expect("layered generator produces a valid graph")
}

fn goal_set(id: &str) -> BTreeSet<String> {
    std::iter::once(id.to_string()).collect()
}

/// The benchmark regimes, smallest first.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        Regime {
            name: "grid_16_corner",
            graph: grid_graph(16),
            start: cell(0, 0),
            goals: goal_set(&cell(15, 15)),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "grid_16_unreachable",
            graph: grid_graph(16),
            start: cell(0, 0),
            goals: goal_set("missing"),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "layered_12x6",
            graph: layered_graph(12, 6),
            start: "src".into(),
            goals: goal_set("sink"),
            policy: SearchPolicy::default(),
        },
        Regime {
            name: "grid_32_budget_limited",
            graph: grid_graph(32),
            start: cell(0, 0),
            goals: goal_set(&cell(31, 31)),
            policy: SearchPolicy::with_max_dequeues(500),
        },
    ]
}

/// Run the regime's search.
///
/// # Panics
///
/// Panics if the search rejects the regime inputs.
#[must_use]
pub fn run_regime(regime: &Regime) -> SearchReport {
    search_with_policy(&regime.graph, &regime.start, &regime.goals, &regime.policy)
        .expect("benchmark regimes are valid")
}

/// Digest binding every regime's trace digest, in regime order.
///
/// Benches compute this twice before timing; a mismatch means timings would
/// compare different work.
///
/// # Panics
///
/// Panics if a trace cannot be hashed.
#[must_use]
pub fn determinism_guard(regimes: &[Regime]) -> ContentHash {
    let mut joined = String::new();
    for regime in regimes {
        let digest = run_regime(regime).trace.digest().expect("trace hashes");
        joined.push_str(regime.name);
        joined.push('=');
        joined.push_str(digest.as_str());
        joined.push('\n');
    }
    canonical_hash(HashDomain::BenchGuard, joined.as_bytes())
}
