//! Search policy: the optional dequeue budget.

use serde::{Deserialize, Serialize};
use ucs_graph::proof::canon::canonical_json_bytes;
use ucs_graph::proof::hash::{canonical_hash, ContentHash};
use ucs_graph::proof::hash_domain::HashDomain;

use crate::error::SearchError;

/// Caller-imposed bounds on a search run.
///
/// The default policy is unbounded: the loop runs until the frontier is
/// empty. Loaded from JSON with [`SearchPolicy::from_json_str`]; absent fields
/// take their defaults and unknown fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchPolicy {
    /// Stop before the dequeue that would exceed this many dequeues.
    /// The best goal found so far is still returned.
    pub max_dequeues: Option<u64>,
}

impl SearchPolicy {
    /// Policy with no bounds.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Policy capping the number of dequeues.
    #[must_use]
    pub fn with_max_dequeues(limit: u64) -> Self {
        Self {
            max_dequeues: Some(limit),
        }
    }

    /// Check that the policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_dequeues` is zero, which
    /// would forbid even the start node's dequeue.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_dequeues == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_dequeues must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Parse and validate a policy from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the text is not a valid
    /// policy document or fails [`SearchPolicy::validate`].
    pub fn from_json_str(text: &str) -> Result<Self, SearchError> {
        let policy: Self = serde_json::from_str(text).map_err(|e| SearchError::InvalidPolicy {
            detail: e.to_string(),
        })?;
        policy.validate()?;
        Ok(policy)
    }

    /// Content digest of the policy.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let value = serde_json::json!({ "max_dequeues": self.max_dequeues });
        canonical_hash(HashDomain::SearchPolicy, &canonical_json_bytes(&value))
    }
}
