//! The search trace: one [`SearchStep`] per frontier dequeue.
//!
//! The ordered step list is the externally observable record of a run and is
//! what visualizers animate. It includes dequeues that were immediately
//! discarded (revisits of explored nodes, entries at or above the best goal
//! cost), not only productive expansions.
//!
//! Steps and whole traces carry content digests computed over canonical JSON,
//! so two runs can be compared without walking every snapshot.

use serde::{Deserialize, Serialize};

use ucs_graph::proof::canon::canonical_json_bytes;
use ucs_graph::proof::hash::{canonical_hash, ContentHash};
use ucs_graph::proof::hash_domain::HashDomain;

use crate::candidate::PathCandidate;
use crate::error::TraceError;
use crate::policy::SearchPolicy;

/// A queued `(cost, path)` pair as recorded in a frontier snapshot.
///
/// Serializes as the two-element array `[cost, [ids...]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, Vec<String>)", into = "(f64, Vec<String>)")]
pub struct FrontierEntry {
    pub cost: f64,
    pub path: Vec<String>,
}

impl From<(f64, Vec<String>)> for FrontierEntry {
    fn from((cost, path): (f64, Vec<String>)) -> Self {
        Self { cost, path }
    }
}

impl From<FrontierEntry> for (f64, Vec<String>) {
    fn from(entry: FrontierEntry) -> Self {
        (entry.cost, entry.path)
    }
}

impl From<&PathCandidate> for FrontierEntry {
    fn from(candidate: &PathCandidate) -> Self {
        Self {
            cost: candidate.cost(),
            path: candidate.path().to_vec(),
        }
    }
}

/// One frontier dequeue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchStep {
    /// The dequeued node (last element of `current_path`).
    pub current_node: String,
    /// Entries still queued after this dequeue, in pop order.
    pub frontier: Vec<FrontierEntry>,
    /// Nodes expanded before this dequeue, sorted by id.
    pub explored: Vec<String>,
    /// Path of the dequeued entry.
    pub current_path: Vec<String>,
    /// Cost of the dequeued entry.
    pub current_cost: f64,
}

impl SearchStep {
    /// Content digest of this step.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Json`] if the step cannot be converted to JSON.
    pub fn digest(&self) -> Result<ContentHash, TraceError> {
        let value = serde_json::to_value(self)?;
        Ok(canonical_hash(
            HashDomain::SearchStep,
            &canonical_json_bytes(&value),
        ))
    }
}

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerminationReason {
    /// The frontier emptied.
    FrontierExhausted,
    /// `SearchPolicy::max_dequeues` was reached with entries still queued.
    DequeueBudgetExceeded { limit: u64 },
}

/// Run-level facts recorded alongside the steps.
///
/// `graph_digest`, `start`, `goals` and `policy` are everything needed to
/// re-run the search; see [`crate::replay::replay_verify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceMetadata {
    /// `Graph::digest()` of the searched graph.
    pub graph_digest: String,
    pub start: String,
    /// Goal ids, sorted.
    pub goals: Vec<String>,
    pub policy: SearchPolicy,

    /// Cost of the best goal path, if one was found.
    pub best_cost: Option<f64>,
    /// Index of the step that discovered the best path.
    pub best_step_index: Option<u64>,

    // Counters
    pub total_dequeues: u64,
    pub total_expansions: u64,
    /// Dequeues skipped because the node was already explored.
    pub total_revisits_skipped: u64,
    /// Dequeues skipped because their cost reached the best goal cost.
    pub total_bound_skipped: u64,
    pub total_enqueued: u64,
    /// Neighbors not enqueued because they are not nodes of the graph.
    pub total_dangling_skipped: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// The complete record of one search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTrace {
    /// Every dequeue, in chronological order.
    pub steps: Vec<SearchStep>,
    pub metadata: TraceMetadata,
}

impl SearchTrace {
    /// Serialize to canonical JSON bytes (sorted keys, compact).
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Json`] if the trace cannot be converted to JSON.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, TraceError> {
        let value = serde_json::to_value(self)?;
        Ok(canonical_json_bytes(&value))
    }

    /// Content digest of the whole trace.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Json`] if the trace cannot be converted to JSON.
    pub fn digest(&self) -> Result<ContentHash, TraceError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
    }

    /// Parse a trace previously written with
    /// [`SearchTrace::to_canonical_json_bytes`] (or any equivalent JSON).
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Json`] if the bytes are not a valid trace.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, TraceError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
