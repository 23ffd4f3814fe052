//! Error types for tree construction and scoring.
//!
//! Every variant is a programming error on the caller's side. Nothing is
//! retried or recovered; failures surface immediately.

use thiserror::Error;

use crate::node::NodeId;

/// Errors raised by [`SearchTree`](crate::SearchTree) operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The node already has a parent; re-parenting is unsupported.
    #[error("node {node} is already attached to parent {parent}")]
    AlreadyAttached {
        /// The node that was being attached.
        node: NodeId,
        /// Its existing parent.
        parent: NodeId,
    },

    /// UCB1 reads the parent's visit count; a parentless node has none.
    #[error("node {node} has no parent to score against")]
    ScoredRoot {
        /// The node that was being scored.
        node: NodeId,
    },

    /// The attachment would make the node its own ancestor.
    #[error("attaching node {node} under {parent} would create a cycle")]
    AncestryCycle {
        /// The node that was being attached.
        node: NodeId,
        /// The prospective parent, a descendant of `node` (or `node`
        /// itself).
        parent: NodeId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TreeError::AlreadyAttached {
            node: NodeId::new(2),
            parent: NodeId::new(0),
        };
        assert_eq!(err.to_string(), "node 2 is already attached to parent 0");

        let err = TreeError::ScoredRoot { node: NodeId::new(0) };
        assert_eq!(err.to_string(), "node 0 has no parent to score against");

        let err = TreeError::AncestryCycle {
            node: NodeId::new(0),
            parent: NodeId::new(3),
        };
        assert_eq!(
            err.to_string(),
            "attaching node 0 under 3 would create a cycle"
        );
    }
}
