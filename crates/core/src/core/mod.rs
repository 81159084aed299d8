//! Core data structures for command code generation.
//!
//! This module contains the frequency table, the merge tree, the merge
//! priority queue and the generated code table, independent of how codes
//! are stored or served.

pub mod codes;
pub mod frequency;
pub mod priority;
pub mod tree;

pub use codes::{Code, CodeStats, CodeTable, SingleSymbolPolicy};
pub use frequency::{FrequencyTable, Symbol};
pub use priority::{MergeCandidate, NodePriorityQueue};
pub use tree::{CodeTree, NodeArena, NodeId, TreeNode};
