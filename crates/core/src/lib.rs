//! cmdcode-core - Core data structures for frequency-driven command codes
//!
//! This crate provides the types shared by code generation, storage and
//! lookup: symbol frequencies, the arena-backed merge tree, the merge
//! priority queue, and the resulting prefix-code table.
//!
//! # Features
//!
//! - Frequency counting with `AHashMap` and compact symbol strings
//! - Deterministic min-priority queue (weight, then creation order)
//! - Index-arena merge tree with exclusive child ownership
//! - Ordered, serializable code tables
//!
//! # Example
//!
//! ```rust
//! use cmdcode_core::{Code, CodeTable, FrequencyTable};
//!
//! let freqs: FrequencyTable = ["LEFT", "GRAB", "LEFT"].into_iter().collect();
//! assert_eq!(freqs.get("LEFT"), Some(2));
//!
//! let mut codes = CodeTable::new();
//! codes.insert("LEFT".into(), Code::parse("1").unwrap());
//! codes.insert("GRAB".into(), Code::parse("0").unwrap());
//! assert!(codes.is_prefix_free());
//! assert_eq!(codes.weighted_length(&freqs), 3);
//! ```

pub mod error;
pub use error::{CodeError, Result};

pub mod core;
pub use core::{
    Code, CodeStats, CodeTable, CodeTree, FrequencyTable, MergeCandidate, NodeArena, NodeId,
    NodePriorityQueue, SingleSymbolPolicy, Symbol, TreeNode,
};
