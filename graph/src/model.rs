//! Immutable graph model: nodes with opaque payloads and weighted out-edges.
//!
//! Nodes and neighbor maps are `BTreeMap`s so every iteration order is
//! sorted by id. Searches rely on this for bit-identical traces across
//! processes.

use std::collections::BTreeMap;

use crate::error::GraphError;
use crate::proof::canon::canonical_json_bytes;
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// A graph node: identifier, opaque display payload, and outgoing edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    value: String,
    neighbors: BTreeMap<String, f64>,
}

impl Node {
    pub(crate) fn new(id: String, value: String, neighbors: BTreeMap<String, f64>) -> Self {
        Self {
            id,
            value,
            neighbors,
        }
    }

    /// Unique identifier (equal to this node's key in the graph).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Opaque payload, carried through unchanged for display.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Outgoing `(neighbor_id, edge_cost)` pairs in neighbor-id order.
    pub fn neighbors(&self) -> impl ExactSizeIterator<Item = (&str, f64)> + '_ {
        self.neighbors.iter().map(|(id, cost)| (id.as_str(), *cost))
    }

    /// Cost of the edge to `neighbor`, if one exists.
    #[must_use]
    pub fn edge_cost(&self, neighbor: &str) -> Option<f64> {
        self.neighbors.get(neighbor).copied()
    }

    /// Number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }
}

/// Read-only mapping from node id to [`Node`].
///
/// Built once via [`crate::build::build_graph`] or
/// [`crate::build::GraphBuilder`]; there is no mutation API. Cycles are
/// allowed. Edge costs are expected to be non-negative but are not checked
/// here; see [`Graph::audit`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    nodes: BTreeMap<String, Node>,
}

impl Graph {
    pub(crate) fn from_nodes(nodes: BTreeMap<String, Node>) -> Self {
        Self { nodes }
    }

    /// Look up a node by id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `id` is not a node of this graph.
    pub fn get(&self, id: &str) -> Result<&Node, GraphError> {
        self.nodes
            .get(id)
            .ok_or_else(|| GraphError::NotFound { id: id.to_string() })
    }

    /// Whether `id` is a node of this graph.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Outgoing `(neighbor_id, edge_cost)` pairs of node `id`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `id` is not a node of this graph.
    pub fn neighbors(
        &self,
        id: &str,
    ) -> Result<impl ExactSizeIterator<Item = (&str, f64)> + '_, GraphError> {
        Ok(self.get(id)?.neighbors())
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::out_degree).sum()
    }

    /// Node ids in sorted order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// The graph as a JSON value in its raw input shape
    /// (`{id: {id, value, neighbors}}`).
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.nodes
                .iter()
                .map(|(key, node)| {
                    let neighbors: serde_json::Map<String, serde_json::Value> = node
                        .neighbors
                        .iter()
                        .map(|(to, cost)| (to.clone(), serde_json::Value::from(*cost)))
                        .collect();
                    (
                        key.clone(),
                        serde_json::json!({
                            "id": node.id,
                            "neighbors": neighbors,
                            "value": node.value,
                        }),
                    )
                })
                .collect(),
        )
    }

    /// Content digest of the graph snapshot.
    ///
    /// Independent of the key order of whatever input the graph was built
    /// from; two graphs with the same nodes, values and edges hash equal.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let bytes = canonical_json_bytes(&self.to_json_value());
        canonical_hash(HashDomain::GraphSnapshot, &bytes)
    }
}
