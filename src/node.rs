//! Tree node and node-id types.
//!
//! Nodes are arena-allocated and reference each other by index (`NodeId`)
//! rather than by pointer, which keeps the parent link non-owning and the
//! whole structure serializable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index into the [`SearchTree`](crate::SearchTree) node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "none")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A node in the search tree.
///
/// Tracks the reward and visit statistics that UCB1 scoring reads. The
/// payload is opaque to the tree: stored and handed back, never inspected.
///
/// Statistics are only mutated by the propagation walks on
/// [`SearchTree`](crate::SearchTree), which keeps the exactly-once
/// ancestor-update invariant out of callers' hands.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeNode<P> {
    /// Application-defined state carried by this node.
    pub(crate) payload: P,

    /// Reward accumulated by this node and everything credited through it.
    pub(crate) total_reward: f64,

    /// Times this node (or a descendant reached through it) was selected.
    pub(crate) visits: u32,

    /// Parent node (NONE for roots and not-yet-attached nodes).
    pub(crate) parent: NodeId,

    /// Child nodes in attach order.
    /// SmallVec optimizes for typical branching factor < 8.
    pub(crate) children: SmallVec<[NodeId; 8]>,
}

impl<P> TreeNode<P> {
    /// Create a detached node: zero reward, zero visits, no parent,
    /// no children.
    pub(crate) fn new(payload: P) -> Self {
        Self {
            payload,
            total_reward: 0.0,
            visits: 0,
            parent: NodeId::NONE,
            children: SmallVec::new(),
        }
    }

    /// The application payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Total accumulated reward.
    #[must_use]
    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    /// Visit count.
    #[must_use]
    pub fn visits(&self) -> u32 {
        self.visits
    }

    /// Parent id (`NodeId::NONE` when this node has no parent).
    #[must_use]
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Child ids in attach order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// A node with no parent is a root (or not yet attached).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check whether this node has never been visited.
    #[must_use]
    pub fn is_unexplored(&self) -> bool {
        self.visits == 0
    }

    /// Mean observed reward per visit.
    ///
    /// Returns 0.0 if the node hasn't been visited yet.
    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward / f64::from(self.visits)
        }
    }
}
