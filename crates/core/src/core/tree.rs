//! Arena-backed binary merge tree.
//!
//! Nodes are appended to a single `Vec` and refer to their children by
//! index. A child index is handed to exactly one parent, nodes are never
//! removed, and the whole arena is dropped at once when the tree goes away.

use super::frequency::Symbol;

/// Index of a node inside a [`CodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the merge tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A distinct input symbol and its count
    Leaf { symbol: Symbol, weight: u64 },
    /// Merge of two subtrees; `weight` is the sum of both children
    Internal {
        weight: u64,
        left: NodeId,
        right: NodeId,
    },
}

impl TreeNode {
    /// Weight of this node.
    #[inline]
    pub fn weight(&self) -> u64 {
        match self {
            TreeNode::Leaf { weight, .. } => *weight,
            TreeNode::Internal { weight, .. } => *weight,
        }
    }

    /// Check if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }
}

/// Append-only node storage used while merging.
///
/// Callers pass each id to `push_internal` at most once, so every node has
/// at most one parent.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<TreeNode>,
}

impl NodeArena {
    /// Create an arena sized for `leaves` distinct symbols.
    pub fn with_leaf_capacity(leaves: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(leaves.saturating_mul(2).saturating_sub(1)),
        }
    }

    /// Add a leaf and return its id.
    pub fn push_leaf(&mut self, symbol: Symbol, weight: u64) -> NodeId {
        self.push(TreeNode::Leaf { symbol, weight })
    }

    /// Add an internal node over two existing nodes and return its id.
    pub fn push_internal(&mut self, left: NodeId, right: NodeId) -> NodeId {
        let weight = self.nodes[left.index()].weight() + self.nodes[right.index()].weight();
        self.push(TreeNode::Internal {
            weight,
            left,
            right,
        })
    }

    /// Get a node by id.
    #[inline]
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Seal the arena into a tree rooted at `root`.
    pub fn into_tree(self, root: NodeId) -> CodeTree {
        CodeTree {
            nodes: self.nodes,
            root,
        }
    }

    fn push(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

/// A finished merge tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    nodes: Vec<TreeNode>,
    root: NodeId,
}

impl CodeTree {
    /// Id of the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The root node.
    #[inline]
    pub fn root_node(&self) -> &TreeNode {
        self.node(self.root)
    }

    /// Get a node by id.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Total weight, equal to the length of the counted sequence.
    pub fn weight(&self) -> u64 {
        self.root_node().weight()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Number of internal nodes.
    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate all nodes in allocation order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_weight_is_sum() {
        let mut arena = NodeArena::with_leaf_capacity(2);
        let a = arena.push_leaf("a".into(), 3);
        let b = arena.push_leaf("b".into(), 4);
        let root = arena.push_internal(a, b);

        assert_eq!(arena.get(root).weight(), 7);
        assert_eq!(arena.len(), 3);

        let tree = arena.into_tree(root);
        assert_eq!(tree.weight(), 7);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.internal_count(), 1);
        assert_eq!(
            tree.root_node(),
            &TreeNode::Internal {
                weight: 7,
                left: a,
                right: b
            }
        );
    }

    #[test]
    fn test_single_leaf_tree() {
        let mut arena = NodeArena::with_leaf_capacity(1);
        let only = arena.push_leaf("LEFT".into(), 5);
        let tree = arena.into_tree(only);

        assert!(tree.root_node().is_leaf());
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.internal_count(), 0);
    }

    #[test]
    fn test_ids_follow_allocation_order() {
        let mut arena = NodeArena::with_leaf_capacity(3);
        let ids: Vec<NodeId> = ["a", "b", "c"]
            .iter()
            .map(|s| arena.push_leaf((*s).into(), 1))
            .collect();
        let inner = arena.push_internal(ids[0], ids[1]);
        let root = arena.push_internal(inner, ids[2]);

        let tree = arena.into_tree(root);
        let listed: Vec<usize> = tree.nodes().map(|(id, _)| id.index()).collect();
        assert_eq!(listed, vec![0, 1, 2, 3, 4]);
        assert_eq!(root.index(), 4);
        assert_eq!(tree.node(inner).weight(), 2);
    }
}
