//! Newtype handle for layout nodes.
//!
//! A [`NodeId`] is opaque to this crate: it only travels inside layout
//! expressions so the layout engine can look up the node's coordinates later.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the layout node whose coordinate frame anchors a position.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Creates a new NodeId.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
