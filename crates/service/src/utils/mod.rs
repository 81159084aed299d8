//! Utility modules for the command code service.
//!
//! This module contains the code table cache and command input parsing.

pub mod cache;
pub mod input;

pub use cache::{CacheStats, CodeTableCache};
pub use input::{CommandParser, InputFormat};
