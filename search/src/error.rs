//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures only: once the loop starts, every
//! outcome (goal found, no path, budget exhausted) is a successful
//! [`crate::search::SearchReport`].

use thiserror::Error;
use ucs_graph::GraphError;

/// Failure before a search could run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The start id is not a node of the graph.
    #[error("start node {start:?} is not in the graph")]
    InvalidStart { start: String },

    /// The search policy is unusable.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// A graph lookup failed while resolving the result.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Failure serializing or parsing a trace.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
