//! Typed graph errors.

use thiserror::Error;

/// Failure building or querying a [`crate::model::Graph`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Raw graph data is missing a required field or has the wrong shape.
    ///
    /// `key` names the offending node entry; it is `None` when the top-level
    /// document itself is malformed.
    #[error("malformed graph input{}: {detail}", node_suffix(.key))]
    MalformedInput { key: Option<String>, detail: String },

    /// A lookup named a node id that is not in the graph.
    #[error("node {id:?} not found in graph")]
    NotFound { id: String },
}

fn node_suffix(key: &Option<String>) -> String {
    key.as_ref()
        .map(|k| format!(" at node {k:?}"))
        .unwrap_or_default()
}

impl GraphError {
    pub(crate) fn malformed(key: &str, detail: impl Into<String>) -> Self {
        Self::MalformedInput {
            key: Some(key.to_string()),
            detail: detail.into(),
        }
    }

    pub(crate) fn malformed_document(detail: impl Into<String>) -> Self {
        Self::MalformedInput {
            key: None,
            detail: detail.into(),
        }
    }
}
