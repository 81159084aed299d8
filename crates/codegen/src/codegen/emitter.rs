//! Code emission from a finished merge tree.

use cmdcode_core::{Code, CodeTable, CodeTree, NodeId, SingleSymbolPolicy, TreeNode};

/// Walks a merge tree and records the root-to-leaf path of every symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeEmitter {
    single_symbol: SingleSymbolPolicy,
}

impl CodeEmitter {
    /// Create an emitter with the given single-symbol policy.
    pub fn new(single_symbol: SingleSymbolPolicy) -> Self {
        Self { single_symbol }
    }

    /// The policy applied when the root is a leaf.
    pub fn single_symbol_policy(&self) -> SingleSymbolPolicy {
        self.single_symbol
    }

    /// Produce the code table for `tree`.
    ///
    /// Traversal is depth-first with an explicit stack, so a very deep tree
    /// costs heap memory rather than call-stack frames.
    pub fn emit(&self, tree: &CodeTree) -> CodeTable {
        let mut table = CodeTable::new();

        if let TreeNode::Leaf { symbol, .. } = tree.root_node() {
            table.insert(symbol.clone(), self.single_symbol.root_leaf_code());
            return table;
        }

        let mut stack: Vec<(NodeId, Code)> = vec![(tree.root(), Code::new())];

        while let Some((id, mut code)) = stack.pop() {
            match tree.node(id) {
                TreeNode::Leaf { symbol, .. } => {
                    table.insert(symbol.clone(), code);
                }
                TreeNode::Internal { left, right, .. } => {
                    // Right goes on first so the left subtree is visited first
                    stack.push((*right, code.with_bit(true)));
                    code.push(false);
                    stack.push((*left, code));
                }
            }
        }

        table
    }
}
