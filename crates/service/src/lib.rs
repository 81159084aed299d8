//! cmdcode-service - Command log storage and code lookup
//!
//! This crate keeps a bounded history of command logs and answers code
//! lookups against the most recent one. Code tables are generated with
//! `cmdcode-codegen` the first time a log is queried and stored next to it.
//!
//! # Features
//!
//! - [`Storage`] trait with in-memory and JSON file implementations
//! - Oldest-first retention once the log cap is reached
//! - LRU cache of generated code tables
//! - Command input parsing (JSON request bodies, plain text)
//!
//! # Example
//!
//! ```rust
//! use cmdcode_service::{CommandCodeService, MemoryStore, ServiceConfig};
//!
//! let mut service = CommandCodeService::new(MemoryStore::new(100), ServiceConfig::default())?;
//! service.submit_log(vec!["LEFT".into(), "GRAB".into(), "LEFT".into()])?;
//!
//! assert_eq!(service.code_for_command("LEFT")?.as_str(), "1");
//! assert_eq!(service.code_for_command("GRAB")?.as_str(), "0");
//! # Ok::<(), cmdcode_service::CodeError>(())
//! ```

// Re-export core types
pub use cmdcode_codegen::{
    Code, CodeError, CodeGenerator, CodeStats, CodeTable, GeneratorConfig, Result,
    SingleSymbolPolicy,
};

pub mod config;
pub use config::{ServiceConfig, ServiceConfigBuilder};

pub mod store;
pub use store::{
    CommandCodeOnly, CommandCodeRecord, CommandLog, CommandLogRecord, JsonFileStore, MemoryStore,
    Storage,
};

pub mod service;
pub use service::CommandCodeService;

pub mod utils;
pub use utils::{CacheStats, CodeTableCache, CommandParser, InputFormat};
