//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Depends on nothing else in the crate. The graph model and the search
//! crate's trace types route every digest through here.

pub mod canon;
pub mod hash;
pub mod hash_domain;
