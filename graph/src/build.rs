//! Graph construction from caller-supplied data.
//!
//! Two entry points:
//!
//! - [`build_graph`] converts the raw JSON mapping
//!   `{node_id: {"id", "value", "neighbors": {neighbor_id: cost}}}`.
//! - [`GraphBuilder`] assembles a graph programmatically.
//!
//! Both check structural shape only. Edge targets and cost signs are not
//! validated here; [`Graph::audit`] reports them on request.

use std::collections::BTreeMap;

use crate::error::GraphError;
use crate::model::{Graph, Node};

/// Build a [`Graph`] from the raw node-id → node-record mapping.
///
/// Every record must be an object carrying `id` (string, equal to its key),
/// `value` (string) and `neighbors` (object of numbers). Extra fields are
/// ignored. Integer costs are accepted and widened to `f64`.
///
/// # Errors
///
/// Returns [`GraphError::MalformedInput`] for the first record (in key
/// order) that is missing a required field or has the wrong shape. No partial
/// graph is returned.
pub fn build_graph(raw: &serde_json::Value) -> Result<Graph, GraphError> {
    let serde_json::Value::Object(entries) = raw else {
        return Err(GraphError::malformed_document(format!(
            "expected an object of node records, found {}",
            json_kind(raw)
        )));
    };

    let mut keys: Vec<&String> = entries.keys().collect();
    keys.sort();

    let mut nodes = BTreeMap::new();
    for key in keys {
        let node = node_from_record(key, &entries[key])?;
        nodes.insert(key.clone(), node);
    }

    tracing::debug!(nodes = nodes.len(), "graph built from raw input");
    Ok(Graph::from_nodes(nodes))
}

fn node_from_record(key: &str, record: &serde_json::Value) -> Result<Node, GraphError> {
    let serde_json::Value::Object(fields) = record else {
        return Err(GraphError::malformed(
            key,
            format!("expected a node record object, found {}", json_kind(record)),
        ));
    };

    let id = required_string(key, fields, "id")?;
    if id != key {
        return Err(GraphError::malformed(
            key,
            format!("field `id` is {id:?} but the record is keyed {key:?}"),
        ));
    }
    let value = required_string(key, fields, "value")?;

    let neighbors = match fields.get("neighbors") {
        None => return Err(GraphError::malformed(key, "missing field `neighbors`")),
        Some(serde_json::Value::Object(raw_neighbors)) => {
            let mut neighbors = BTreeMap::new();
            for (neighbor, cost) in raw_neighbors {
                let Some(cost) = cost.as_f64() else {
                    return Err(GraphError::malformed(
                        key,
                        format!(
                            "cost of edge to {neighbor:?} must be a number, found {}",
                            json_kind(cost)
                        ),
                    ));
                };
                neighbors.insert(neighbor.clone(), cost);
            }
            neighbors
        }
        Some(other) => {
            return Err(GraphError::malformed(
                key,
                format!("field `neighbors` must be an object, found {}", json_kind(other)),
            ))
        }
    };

    Ok(Node::new(id.to_string(), value.to_string(), neighbors))
}

fn required_string<'a>(
    key: &str,
    fields: &'a serde_json::Map<String, serde_json::Value>,
    name: &str,
) -> Result<&'a str, GraphError> {
    match fields.get(name) {
        None => Err(GraphError::malformed(key, format!("missing field `{name}`"))),
        Some(serde_json::Value::String(s)) => Ok(s),
        Some(other) => Err(GraphError::malformed(
            key,
            format!("field `{name}` must be a string, found {}", json_kind(other)),
        )),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl Graph {
    /// Parse a JSON document and build a graph from it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedInput`] if the text is not valid JSON or
    /// if [`build_graph`] rejects its shape.
    pub fn from_json_str(text: &str) -> Result<Self, GraphError> {
        let raw: serde_json::Value = serde_json::from_str(text)
            .map_err(|e| GraphError::malformed_document(format!("invalid JSON: {e}")))?;
        build_graph(&raw)
    }

    /// Byte-slice variant of [`Graph::from_json_str`].
    ///
    /// # Errors
    ///
    /// Same as [`Graph::from_json_str`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, GraphError> {
        let raw: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|e| GraphError::malformed_document(format!("invalid JSON: {e}")))?;
        build_graph(&raw)
    }
}

/// Programmatic graph construction.
///
/// Declare nodes with [`GraphBuilder::node`] and edges with
/// [`GraphBuilder::edge`] in any order; problems are reported once, by
/// [`GraphBuilder::build`].
#[derive(Debug, Default, Clone)]
pub struct GraphBuilder {
    nodes: BTreeMap<String, String>,
    edges: Vec<PendingEdge>,
}

#[derive(Debug, Clone)]
struct PendingEdge {
    from: String,
    to: String,
    cost: f64,
    target_must_exist: bool,
}

impl GraphBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node. Re-declaring an id replaces its value.
    #[must_use]
    pub fn node(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.nodes.insert(id.into(), value.into());
        self
    }

    /// Declare a directed edge. A repeated `(from, to)` pair keeps the last cost.
    #[must_use]
    pub fn edge(self, from: impl Into<String>, to: impl Into<String>, cost: f64) -> Self {
        self.push_edge(from.into(), to.into(), cost, true)
    }

    /// Declare an edge whose target need not be a declared node.
    ///
    /// Raw input accepted by [`build_graph`] may contain such edges; this
    /// lets tests build the same shape programmatically.
    #[must_use]
    pub fn dangling_edge(self, from: impl Into<String>, to: impl Into<String>, cost: f64) -> Self {
        self.push_edge(from.into(), to.into(), cost, false)
    }

    fn push_edge(mut self, from: String, to: String, cost: f64, target_must_exist: bool) -> Self {
        self.edges.push(PendingEdge {
            from,
            to,
            cost,
            target_must_exist,
        });
        self
    }

    /// Finish construction.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MalformedInput`] if an edge names an undeclared
    /// node or carries a non-finite cost.
    pub fn build(self) -> Result<Graph, GraphError> {
        let mut adjacency: BTreeMap<String, BTreeMap<String, f64>> = self
            .nodes
            .keys()
            .map(|id| (id.clone(), BTreeMap::new()))
            .collect();

        for edge in self.edges {
            if !edge.cost.is_finite() {
                return Err(GraphError::malformed(
                    &edge.from,
                    format!("cost of edge to {:?} must be finite, found {}", edge.to, edge.cost),
                ));
            }
            if edge.target_must_exist && !adjacency.contains_key(&edge.to) {
                return Err(GraphError::malformed(
                    &edge.from,
                    format!("edge target {:?} is not a declared node", edge.to),
                ));
            }
            let Some(neighbors) = adjacency.get_mut(&edge.from) else {
                return Err(GraphError::malformed(
                    &edge.from,
                    "edge source is not a declared node",
                ));
            };
            neighbors.insert(edge.to, edge.cost);
        }

        let nodes = self
            .nodes
            .into_iter()
            .map(|(id, value)| {
                let neighbors = adjacency.remove(&id).unwrap_or_default();
                let node = Node::new(id.clone(), value, neighbors);
                (id, node)
            })
            .collect();
        Ok(Graph::from_nodes(nodes))
    }
}
