//! cmdcode-codegen - Prefix-code generation for command sequences
//!
//! This crate turns a sequence of command names into a prefix-free code
//! table where frequent commands get shorter codes.
//!
//! # Features
//!
//! - Frequency counting with parallel processing support
//! - Deterministic merge tree construction (ties broken by creation order)
//! - Stack-based code emission, safe for very deep trees
//! - Configurable handling of single-symbol sequences
//!
//! # Example
//!
//! ```rust
//! use cmdcode_codegen::{CodeGenerator, GeneratorConfig};
//!
//! let generator = CodeGenerator::new(GeneratorConfig::default());
//! let codes = generator.generate(&["LEFT", "GRAB", "LEFT", "BACK", "LEFT", "BACK", "LEFT"]);
//!
//! assert_eq!(codes.get("LEFT").map(|c| c.as_str()), Some("1"));
//! assert_eq!(codes.get("GRAB").map(|c| c.as_str()), Some("00"));
//! assert_eq!(codes.get("BACK").map(|c| c.as_str()), Some("01"));
//! ```

pub use cmdcode_core::{
    Code, CodeError, CodeStats, CodeTable, CodeTree, FrequencyTable, Result, SingleSymbolPolicy,
    Symbol,
};

// Generation pipeline
pub mod codegen;
pub use codegen::{
    generate_codes, CodeEmitter, CodeGenerator, FrequencyCounter, GeneratorConfig,
    GeneratorConfigBuilder, TreeBuilder,
};
