//! Search entry points and the uniform-cost loop.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ucs_graph::Graph;

use crate::candidate::PathCandidate;
use crate::error::SearchError;
use crate::frontier::UniformCostFrontier;
use crate::policy::SearchPolicy;
use crate::trace::{SearchStep, SearchTrace, TerminationReason, TraceMetadata};

/// A node on the result path, as rendered to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathNode {
    pub id: String,
    pub value: String,
}

/// The best path found by a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Nodes from start to goal.
    pub path: Vec<PathNode>,
    /// Sum of edge costs along `path`.
    pub cost: f64,
    /// Trace up to and including the dequeue that discovered this path.
    pub steps: Vec<SearchStep>,
}

impl SearchOutcome {
    /// Node ids along the path.
    #[must_use]
    pub fn path_ids(&self) -> Vec<&str> {
        self.path.iter().map(|n| n.id.as_str()).collect()
    }
}

/// Result of [`search_with_policy`]: the outcome plus the full run trace.
///
/// `trace.steps` covers every dequeue of the run, including those after the
/// best path was discovered; `outcome.steps` stops at the discovering step.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub outcome: Option<SearchOutcome>,
    pub trace: SearchTrace,
}

impl SearchReport {
    /// Returns `true` if some goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the trace and keep only the outcome.
    #[must_use]
    pub fn into_outcome(self) -> Option<SearchOutcome> {
        self.outcome
    }
}

/// Run uniform-cost search from `start` toward any node in `goals`.
///
/// Returns `Ok(None)` when no goal is reachable (including goal ids that are
/// not in the graph, and an empty goal set). Edge costs are assumed to be
/// non-negative; with negative costs the result is unspecified.
///
/// # Errors
///
/// Returns [`SearchError::InvalidStart`] if `start` is not a node of `graph`.
pub fn search(
    graph: &Graph,
    start: &str,
    goals: &BTreeSet<String>,
) -> Result<Option<SearchOutcome>, SearchError> {
    let run = run_search(graph, start, goals, &SearchPolicy::unbounded())?;
    let Some(found) = run.best else {
        return Ok(None);
    };
    let mut steps = run.steps;
    steps.truncate(found.step_count);
    Ok(Some(SearchOutcome {
        path: resolve_path(graph, found.candidate.path())?,
        cost: found.candidate.cost(),
        steps,
    }))
}

/// The best goal seen so far and how many steps had been recorded when it
/// was discovered.
struct BestPath {
    candidate: PathCandidate,
    step_count: usize,
}

#[derive(Default)]
struct LoopCounters {
    dequeues: u64,
    expansions: u64,
    revisits_skipped: u64,
    bound_skipped: u64,
    enqueued: u64,
    dangling_skipped: u64,
}

/// A goal dequeue replaces the best path only at strictly lower cost, so the
/// first goal dequeued at a given cost wins.
fn improves_best(cost: f64, best_cost: f64) -> bool {
    cost < best_cost
}

/// A dequeue at or above the best goal cost is not expanded.
fn reaches_bound(cost: f64, best_cost: f64) -> bool {
    cost >= best_cost
}

/// A neighbor is queued only strictly below the best goal cost.
fn below_bound(cost: f64, best_cost: f64) -> bool {
    cost < best_cost
}

/// Everything the loop produces, before any of it is rendered.
struct SearchRun {
    steps: Vec<SearchStep>,
    best: Option<BestPath>,
    counters: LoopCounters,
    frontier_high_water: u64,
    termination_reason: TerminationReason,
}

/// Run uniform-cost search under `policy` and return the full report.
///
/// Every dequeue appends one [`SearchStep`] before any explored or bound
/// check, so the trace also records revisits and pruned entries.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation and
/// [`SearchError::InvalidStart`] if `start` is not a node of `graph`. No
/// search step is taken in either case.
pub fn search_with_policy(
    graph: &Graph,
    start: &str,
    goals: &BTreeSet<String>,
    policy: &SearchPolicy,
) -> Result<SearchReport, SearchError> {
    let run = run_search(graph, start, goals, policy)?;

    let outcome = match &run.best {
        Some(found) => Some(SearchOutcome {
            path: resolve_path(graph, found.candidate.path())?,
            cost: found.candidate.cost(),
            steps: run.steps[..found.step_count].to_vec(),
        }),
        None => None,
    };

    let counters = &run.counters;
    let metadata = TraceMetadata {
        graph_digest: graph.digest().to_string(),
        start: start.to_string(),
        goals: goals.iter().cloned().collect(),
        policy: *policy,
        best_cost: run.best.as_ref().map(|b| b.candidate.cost()),
        best_step_index: run.best.as_ref().map(|b| (b.step_count - 1) as u64),
        total_dequeues: counters.dequeues,
        total_expansions: counters.expansions,
        total_revisits_skipped: counters.revisits_skipped,
        total_bound_skipped: counters.bound_skipped,
        total_enqueued: counters.enqueued,
        total_dangling_skipped: counters.dangling_skipped,
        frontier_high_water: run.frontier_high_water,
        termination_reason: run.termination_reason,
    };

    Ok(SearchReport {
        outcome,
        trace: SearchTrace {
            steps: run.steps,
            metadata,
        },
    })
}

fn run_search(
    graph: &Graph,
    start: &str,
    goals: &BTreeSet<String>,
    policy: &SearchPolicy,
) -> Result<SearchRun, SearchError> {
    policy.validate()?;
    if !graph.contains(start) {
        return Err(SearchError::InvalidStart {
            start: start.to_string(),
        });
    }

    let _span = tracing::debug_span!("ucs_search", start, goals = goals.len()).entered();

    let mut frontier = UniformCostFrontier::new();
    let mut explored: BTreeSet<String> = BTreeSet::new();
    let mut steps: Vec<SearchStep> = Vec::new();
    let mut best: Option<BestPath> = None;
    let mut counters = LoopCounters::default();

    frontier.push(PathCandidate::root(start));

    let termination_reason = loop {
        if let Some(limit) = policy.max_dequeues {
            if counters.dequeues >= limit && !frontier.is_empty() {
                break TerminationReason::DequeueBudgetExceeded { limit };
            }
        }

        let Some(current) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        counters.dequeues += 1;
        let node = current.last();
        let cost = current.cost();

        steps.push(SearchStep {
            current_node: node.to_string(),
            frontier: frontier.snapshot(),
            explored: explored.iter().cloned().collect(),
            current_path: current.path().to_vec(),
            current_cost: cost,
        });
        tracing::trace!(
            step = steps.len() - 1,
            node,
            cost,
            queued = frontier.len(),
            "dequeue"
        );

        let best_cost = best.as_ref().map_or(f64::INFINITY, |b| b.candidate.cost());
        if goals.contains(node) && improves_best(cost, best_cost) {
            tracing::debug!(step = steps.len() - 1, node, cost, "best goal path improved");
            best = Some(BestPath {
                candidate: current.clone(),
                step_count: steps.len(),
            });
        }
        let best_cost = best.as_ref().map_or(f64::INFINITY, |b| b.candidate.cost());

        if explored.contains(node) {
            counters.revisits_skipped += 1;
            continue;
        }
        if reaches_bound(cost, best_cost) {
            counters.bound_skipped += 1;
            continue;
        }

        explored.insert(node.to_string());
        counters.expansions += 1;

        for (neighbor, edge_cost) in graph.neighbors(node)? {
            if explored.contains(neighbor) {
                continue;
            }
            if !graph.contains(neighbor) {
                tracing::warn!(from = node, to = neighbor, "skipping edge to unknown node");
                counters.dangling_skipped += 1;
                continue;
            }
            let next = current.extend(neighbor, edge_cost);
            if below_bound(next.cost(), best_cost) {
                frontier.push(next);
                counters.enqueued += 1;
            }
        }
    };

    tracing::debug!(
        dequeues = counters.dequeues,
        expansions = counters.expansions,
        revisits_skipped = counters.revisits_skipped,
        bound_skipped = counters.bound_skipped,
        enqueued = counters.enqueued,
        dangling_skipped = counters.dangling_skipped,
        frontier_high_water = frontier.high_water(),
        goal_reached = best.is_some(),
        ?termination_reason,
        "search finished"
    );

    Ok(SearchRun {
        steps,
        best,
        counters,
        frontier_high_water: frontier.high_water(),
        termination_reason,
    })
}

fn resolve_path(graph: &Graph, ids: &[String]) -> Result<Vec<PathNode>, SearchError> {
    ids.iter()
        .map(|id| {
            let node = graph.get(id)?;
            Ok(PathNode {
                id: node.id().to_string(),
                value: node.value().to_string(),
            })
        })
        .collect()
}
