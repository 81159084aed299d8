//! Merge tree construction.
//!
//! Leaves are created in ascending symbol order and queued by weight; the
//! two lightest nodes are merged until a single root remains. Equal weights
//! are resolved by creation order, which makes the tree a pure function of
//! the frequency table.

use cmdcode_core::{CodeTree, FrequencyTable, NodeArena, NodePriorityQueue};

/// Builds the merge tree for a frequency table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

impl TreeBuilder {
    /// Create a new tree builder.
    pub fn new() -> Self {
        Self
    }

    /// Build the tree.
    ///
    /// Returns None for an empty table. A table with one symbol yields a
    /// tree whose root is that symbol's leaf.
    pub fn build(&self, frequencies: &FrequencyTable) -> Option<CodeTree> {
        let entries = frequencies.sorted();
        let leaves = entries.len();

        let mut arena = NodeArena::with_leaf_capacity(leaves);
        let mut queue = NodePriorityQueue::with_capacity(leaves);

        for (symbol, count) in entries {
            let leaf = arena.push_leaf(symbol.clone(), count);
            queue.push(leaf, count);
        }

        // first is the lighter node and becomes the left child
        while let Some((first, second)) = queue.pop_pair() {
            let parent = arena.push_internal(first.node, second.node);
            queue.push(parent, first.weight + second.weight);
        }

        let root = queue.pop()?;
        Some(arena.into_tree(root.node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdcode_core::TreeNode;

    fn leaf_symbol(node: &TreeNode) -> Option<String> {
        match node {
            TreeNode::Leaf { symbol, .. } => Some(symbol.to_string()),
            TreeNode::Internal { .. } => None,
        }
    }

    #[test]
    fn test_empty_table() {
        assert!(TreeBuilder::new().build(&FrequencyTable::new()).is_none());
    }

    #[test]
    fn test_single_symbol_is_root_leaf() {
        let freqs: FrequencyTable = ["LEFT", "LEFT"].into_iter().collect();
        let tree = TreeBuilder::new().build(&freqs).unwrap();

        assert_eq!(tree.len(), 1);
        assert_eq!(leaf_symbol(tree.root_node()).as_deref(), Some("LEFT"));
        assert_eq!(tree.weight(), 2);
    }

    #[test]
    fn test_node_counts() {
        let freqs: FrequencyTable = ["a", "b", "c", "d", "e", "a", "b", "a"].into_iter().collect();
        let tree = TreeBuilder::new().build(&freqs).unwrap();

        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.internal_count(), 4);
        assert_eq!(tree.weight(), 8);
    }

    #[test]
    fn test_lighter_node_goes_left() {
        // LEFT=4, BACK=2, GRAB=1
        let freqs: FrequencyTable = ["LEFT", "GRAB", "LEFT", "BACK", "LEFT", "BACK", "LEFT"]
            .into_iter()
            .collect();
        let tree = TreeBuilder::new().build(&freqs).unwrap();

        let TreeNode::Internal { weight, left, right } = tree.root_node() else {
            panic!("root should be internal");
        };
        assert_eq!(*weight, 7);
        assert_eq!(leaf_symbol(tree.node(*right)).as_deref(), Some("LEFT"));

        let TreeNode::Internal { weight, left, right } = tree.node(*left) else {
            panic!("left subtree should be internal");
        };
        assert_eq!(*weight, 3);
        assert_eq!(leaf_symbol(tree.node(*left)).as_deref(), Some("GRAB"));
        assert_eq!(leaf_symbol(tree.node(*right)).as_deref(), Some("BACK"));
    }

    #[test]
    fn test_internal_weights_are_sums() {
        let freqs: FrequencyTable = ["a", "a", "a", "b", "b", "c", "d", "d", "d", "d"]
            .into_iter()
            .collect();
        let tree = TreeBuilder::new().build(&freqs).unwrap();

        for (_, node) in tree.nodes() {
            if let TreeNode::Internal { weight, left, right } = node {
                assert_eq!(*weight, tree.node(*left).weight() + tree.node(*right).weight());
            }
        }
    }

    #[test]
    fn test_same_table_same_tree() {
        let forward: FrequencyTable = ["w", "x", "y", "z"].into_iter().collect();
        let backward: FrequencyTable = ["z", "y", "x", "w"].into_iter().collect();

        let builder = TreeBuilder::new();
        assert_eq!(builder.build(&forward), builder.build(&backward));
    }
}
