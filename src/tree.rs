//! Arena-based search tree with statistic backpropagation.
//!
//! Nodes are stored in a flat `Vec` and referenced by `NodeId` indices.
//! Reward credits and visit counts propagate to every ancestor through an
//! iterative parent walk, so a node's statistics always reflect the
//! aggregate of everything credited through it and its UCB1 score reads
//! up-to-date global visit pressure without a separate aggregation pass.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::UcbConfig;
use crate::error::TreeError;
use crate::node::{NodeId, TreeNode};
use crate::score::ucb1;

/// Arena-based search tree.
///
/// The arena owns every node; parent links are non-owning index
/// back-references. Roots are simply nodes that were never attached, so a
/// single arena can hold freshly allocated nodes awaiting
/// [`attach`](Self::attach).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTree<P> {
    /// All nodes, detached ones included.
    nodes: Vec<TreeNode<P>>,

    /// Scoring parameters.
    config: UcbConfig,
}

impl<P> SearchTree<P> {
    /// Create an empty tree with default scoring parameters.
    pub fn new() -> Self {
        Self::with_config(UcbConfig::default())
    }

    /// Create an empty tree with custom scoring parameters.
    pub fn with_config(config: UcbConfig) -> Self {
        Self {
            nodes: Vec::new(),
            config,
        }
    }

    /// Create a tree with custom initial node capacity.
    pub fn with_capacity(config: UcbConfig, capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            config,
        }
    }

    /// The scoring parameters in effect.
    #[must_use]
    pub fn config(&self) -> &UcbConfig {
        &self.config
    }

    /// Allocate a detached node carrying `payload`, returning its ID.
    ///
    /// The node starts with zero reward, zero visits, no parent, and no
    /// children; link it into the tree with [`attach`](Self::attach).
    pub fn alloc(&mut self, payload: P) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(TreeNode::new(payload));
        id
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TreeNode<P> {
        &self.nodes[id.raw() as usize]
    }

    /// Get a node's payload mutably.
    ///
    /// Statistics stay read-only from the outside; only the propagation
    /// walks update them.
    pub fn payload_mut(&mut self, id: NodeId) -> &mut P {
        &mut self.nodes[id.raw() as usize].payload
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode<P>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Iterate over the IDs of all parentless nodes.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| NodeId::new(i as u32))
    }

    /// Attach `node` as the last child of `parent`.
    ///
    /// Sets the node's parent back-reference and appends it to the
    /// parent's child list. A node can be attached at most once;
    /// re-parenting is unsupported.
    ///
    /// # Errors
    ///
    /// - [`TreeError::AlreadyAttached`] if `node` already has a parent.
    /// - [`TreeError::AncestryCycle`] if `parent` is `node` itself or one
    ///   of its descendants.
    pub fn attach(&mut self, node: NodeId, parent: NodeId) -> Result<(), TreeError> {
        let current = self.get(node).parent;
        if !current.is_none() {
            return Err(TreeError::AlreadyAttached {
                node,
                parent: current,
            });
        }

        // Finding `node` on the parent's ancestor path means the
        // attachment would close a cycle.
        let mut cursor = parent;
        while !cursor.is_none() {
            if cursor == node {
                return Err(TreeError::AncestryCycle { node, parent });
            }
            cursor = self.get(cursor).parent;
        }

        self.nodes[node.raw() as usize].parent = parent;
        self.nodes[parent.raw() as usize].children.push(node);
        trace!("attached node {} under {}", node, parent);
        Ok(())
    }

    /// Add `reward` to this node's total and to every ancestor's, root
    /// inclusive.
    ///
    /// Each node on the path is updated exactly once.
    pub fn credit_reward(&mut self, id: NodeId, reward: f64) {
        let mut cursor = id;
        while !cursor.is_none() {
            let node = &mut self.nodes[cursor.raw() as usize];
            node.total_reward += reward;
            trace!(
                "credited {:+} to node {} (total {})",
                reward,
                cursor,
                node.total_reward
            );
            cursor = node.parent;
        }
    }

    /// Count one visit on this node and on every ancestor, root inclusive.
    pub fn record_visit(&mut self, id: NodeId) {
        let mut cursor = id;
        while !cursor.is_none() {
            let node = &mut self.nodes[cursor.raw() as usize];
            node.visits += 1;
            trace!("visit {} on node {}", node.visits, cursor);
            cursor = node.parent;
        }
    }

    /// UCB1 score of `id` under its parent.
    ///
    /// Unvisited nodes score `f64::INFINITY`.
    ///
    /// # Errors
    ///
    /// [`TreeError::ScoredRoot`] if `id` has no parent; the formula needs
    /// the parent's visit count.
    pub fn score(&self, id: NodeId) -> Result<f64, TreeError> {
        let node = self.get(id);
        if node.parent.is_none() {
            return Err(TreeError::ScoredRoot { node: id });
        }

        let parent_visits = self.get(node.parent).visits;
        Ok(ucb1(
            node.total_reward,
            node.visits,
            parent_visits,
            self.config.exploration_constant,
        ))
    }

    /// UCB1 scores of `id`'s children, in child-list order.
    ///
    /// Pure read; scores are recomputed on every call, never cached.
    #[must_use]
    pub fn child_scores(&self, id: NodeId) -> Vec<f64> {
        let node = self.get(id);
        let scores: Vec<f64> = node
            .children
            .iter()
            .map(|&child| {
                let c = self.get(child);
                ucb1(
                    c.total_reward,
                    c.visits,
                    node.visits,
                    self.config.exploration_constant,
                )
            })
            .collect();
        debug!("child scores of node {}: {:?}", id, scores);
        scores
    }

    /// Iterator over the path from `id` to its root, both inclusive.
    ///
    /// This is the walk the propagation operations take.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&cur| {
            let parent = self.get(cur).parent;
            (!parent.is_none()).then_some(parent)
        })
    }

    /// Number of edges between `id` and its root.
    ///
    /// Computed by walking parent links, so it stays correct when a
    /// populated subtree is attached late.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> u32 {
        self.ancestors(id).count() as u32 - 1
    }

    /// Get aggregate statistics about the arena.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let node_count = self.nodes.len();
        let root_count = self.nodes.iter().filter(|n| n.parent.is_none()).count();
        let unexplored_count = self.nodes.iter().filter(|n| n.visits == 0).count();
        let total_links: usize = self.nodes.iter().map(|n| n.children.len()).sum();
        let max_depth = (0..node_count)
            .map(|i| self.depth(NodeId::new(i as u32)))
            .max()
            .unwrap_or(0);

        TreeStats {
            node_count,
            root_count,
            unexplored_count,
            total_links,
            max_depth,
        }
    }
}

impl<P> Default for SearchTree<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate statistics about the node arena.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    /// Total number of nodes, detached ones included.
    pub node_count: usize,

    /// Number of parentless nodes.
    pub root_count: usize,

    /// Number of nodes never visited.
    pub unexplored_count: usize,

    /// Total number of parent-to-child links.
    pub total_links: usize,

    /// Maximum depth reached (edges from a node to its root).
    pub max_depth: u32,
}

impl TreeStats {
    /// Average children per node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.total_links as f64 / self.node_count as f64
        }
    }

    /// Fraction of nodes visited at least once.
    #[must_use]
    pub fn explored_ratio(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            (self.node_count - self.unexplored_count) as f64 / self.node_count as f64
        }
    }
}
