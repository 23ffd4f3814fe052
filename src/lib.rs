//! # uct-tree
//!
//! A statistics-bearing search tree for Monte Carlo Tree Search: nodes
//! track visit counts and accumulated reward, and children are ranked by
//! the UCB1 upper-confidence bound.
//!
//! This crate deliberately stops at the node layer. There is no search
//! driver, no rollout policy, and no game-state interface: callers run
//! their own selection/simulation loop and feed results back through
//! [`SearchTree::credit_reward`] and [`SearchTree::record_visit`].
//!
//! ## Design
//!
//! - **Arena allocation**: nodes live in a flat `Vec` owned by
//!   [`SearchTree`] and reference each other by index-typed [`NodeId`].
//!   The parent link is a non-owning back-reference, so there are no
//!   `Rc`/`Weak` cycles and the whole tree serializes.
//!
//! - **Iterative backpropagation**: reward credits and visit counts walk
//!   the parent chain in a loop, root inclusive, so deep trees cannot
//!   overflow the stack. Every ancestor is updated exactly once per call.
//!
//! - **Explicit exploration constant**: the UCB1 constant lives in
//!   [`UcbConfig`] rather than being hard-coded in the formula.
//!
//! ## Usage
//!
//! ```rust
//! use uct_tree::SearchTree;
//!
//! let mut tree: SearchTree<&str> = SearchTree::new();
//! let root = tree.alloc("root");
//! let child = tree.alloc("child");
//! tree.attach(child, root)?;
//!
//! tree.credit_reward(child, 1.0);
//! tree.record_visit(child);
//!
//! assert_eq!(tree.child_scores(root), vec![1.0]);
//! # Ok::<(), uct_tree::TreeError>(())
//! ```
//!
//! ## Modules
//!
//! - `node`: node and node-id types
//! - `tree`: the arena, statistic propagation, and scoring entry points
//! - `score`: the UCB1 formula
//! - `config`: scoring parameters
//! - `error`: error taxonomy

pub mod config;
pub mod error;
pub mod node;
pub mod score;
pub mod tree;

// Re-export main types
pub use config::UcbConfig;
pub use error::TreeError;
pub use node::{NodeId, TreeNode};
pub use score::ucb1;
pub use tree::{SearchTree, TreeStats};
