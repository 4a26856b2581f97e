//! UCS Search: uniform-cost search with a replayable expansion trace.
//!
//! Depends only on `ucs_graph`.
//!
//! # Crate dependency graph
//!
//! ```text
//! ucs_graph  ←  ucs_search
//! (model, proof)   (frontier, trace, replay)
//! ```
//!
//! # Key types
//!
//! - [`search()`] / [`search_with_policy`]: the entry points
//! - [`SearchOutcome`]: best path, its cost, and the trace up to its discovery
//! - [`SearchTrace`]: every dequeue of a run plus [`TraceMetadata`]
//! - [`SearchPolicy`]: optional dequeue budget
//! - [`replay_verify`]: re-run a recorded trace and compare step digests

#![forbid(unsafe_code)]

pub mod candidate;
pub mod error;
pub mod frontier;
pub mod policy;
pub mod replay;
pub mod search;
pub mod trace;

pub use error::{SearchError, TraceError};
pub use policy::SearchPolicy;
pub use replay::{replay_verify, ReplayError, ReplayVerdict};
pub use search::{search, search_with_policy, PathNode, SearchOutcome, SearchReport};
pub use trace::{FrontierEntry, SearchStep, SearchTrace, TerminationReason, TraceMetadata};
