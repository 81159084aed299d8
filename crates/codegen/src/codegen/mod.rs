//! Code generation for command sequences.
//!
//! Counting, tree building and code emission, each usable on its own and
//! combined by [`CodeGenerator`].

pub mod builder;
pub mod counter;
pub mod emitter;
pub mod generator;

pub use builder::TreeBuilder;
pub use counter::FrequencyCounter;
pub use emitter::CodeEmitter;
pub use generator::{generate_codes, CodeGenerator, GeneratorConfig, GeneratorConfigBuilder};
