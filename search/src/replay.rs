//! Replay verification: re-run a recorded search and compare step digests.

use std::collections::BTreeSet;

use thiserror::Error;
use ucs_graph::Graph;

use crate::error::{SearchError, TraceError};
use crate::search::search_with_policy;
use crate::trace::SearchTrace;

/// Result of comparing a recorded trace against a fresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayVerdict {
    /// Every step digest matched and the step counts are equal.
    Match,
    /// The first point where the runs disagree.
    Divergence { step_index: u64, detail: String },
}

#[derive(Debug, Error)]
pub enum ReplayError {
    /// The supplied graph is not the one the trace was recorded against.
    #[error("graph digest mismatch: trace recorded {recorded}, graph is {actual}")]
    GraphMismatch { recorded: String, actual: String },

    /// The recorded start, goals or policy no longer produce a search.
    #[error("replay search failed: {0}")]
    Search(#[from] SearchError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Re-run the search described by `trace.metadata` on `graph` and compare
/// the resulting steps with the recorded ones, in order.
///
/// # Errors
///
/// Returns [`ReplayError::GraphMismatch`] if `graph` does not hash to the
/// recorded digest, [`ReplayError::Search`] if the recorded inputs are
/// rejected, and [`ReplayError::Trace`] if a step cannot be hashed.
pub fn replay_verify(graph: &Graph, trace: &SearchTrace) -> Result<ReplayVerdict, ReplayError> {
    let meta = &trace.metadata;
    let actual = graph.digest();
    if actual.as_str() != meta.graph_digest {
        return Err(ReplayError::GraphMismatch {
            recorded: meta.graph_digest.clone(),
            actual: actual.to_string(),
        });
    }

    let goals: BTreeSet<String> = meta.goals.iter().cloned().collect();
    let report = search_with_policy(graph, &meta.start, &goals, &meta.policy)?;
    let fresh = &report.trace.steps;

    for (index, (recorded, replayed)) in trace.steps.iter().zip(fresh).enumerate() {
        if recorded.digest()? != replayed.digest()? {
            tracing::debug!(step = index, "replay diverged");
            return Ok(ReplayVerdict::Divergence {
                step_index: index as u64,
                detail: format!(
                    "recorded dequeue of {:?} at cost {}, replay dequeued {:?} at cost {}",
                    recorded.current_node,
                    recorded.current_cost,
                    replayed.current_node,
                    replayed.current_cost
                ),
            });
        }
    }

    if trace.steps.len() != fresh.len() {
        let shorter = trace.steps.len().min(fresh.len());
        return Ok(ReplayVerdict::Divergence {
            step_index: shorter as u64,
            detail: format!(
                "recorded {} steps, replay produced {}",
                trace.steps.len(),
                fresh.len()
            ),
        });
    }

    Ok(ReplayVerdict::Match)
}
