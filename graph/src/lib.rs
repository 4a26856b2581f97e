//! UCS Graph: the immutable graph model searched by `ucs_search`.
//!
//! This crate has no knowledge of searching. It owns:
//!
//! - [`model`]: [`Graph`] and [`Node`]: read-only lookup and edge iteration
//! - [`build`]: [`build_graph`] from raw JSON, plus [`GraphBuilder`]
//! - [`audit`]: advisory findings (dangling edges, negative costs)
//! - [`proof`]: canonical JSON and domain-separated SHA-256 digests
//!
//! # Crate dependency graph
//!
//! ```text
//! ucs_graph  ←  ucs_search
//! (model, proof)   (frontier, trace, replay)
//! ```

#![forbid(unsafe_code)]

pub mod audit;
pub mod build;
pub mod error;
pub mod model;
pub mod proof;

pub use audit::GraphFinding;
pub use build::{build_graph, GraphBuilder};
pub use error::GraphError;
pub use model::{Graph, Node};
