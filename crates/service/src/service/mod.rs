//! Command code lookup service.
//!
//! This module provides [`CommandCodeService`], which stores command logs
//! and answers "what is the code of this command in the latest log". Codes
//! for a log are generated the first time they are asked for, written to the
//! store, and served from the store (or the in-process cache) afterwards.

use crate::config::ServiceConfig;
use crate::store::{code_table_from_records, CommandCodeRecord, CommandLogRecord, Storage};
use crate::utils::{CacheStats, CodeTableCache};
use cmdcode_codegen::CodeGenerator;
use cmdcode_core::{Code, CodeError, CodeTable, Result};
use tracing::{debug, info};

/// Stores command logs and serves their codes.
pub struct CommandCodeService<S> {
    store: S,
    generator: CodeGenerator,
    cache: CodeTableCache,
    config: ServiceConfig,
}

impl<S: Storage> CommandCodeService<S> {
    /// Create a service over `store`.
    pub fn new(store: S, config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            generator: CodeGenerator::new(config.generator.clone()),
            cache: CodeTableCache::with_capacity(config.cache_capacity),
            config,
        })
    }

    /// The service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service and return its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Code table cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Store a new command log.
    pub fn submit_log(&mut self, commands: Vec<String>) -> Result<CommandLogRecord> {
        if let Some(max) = self.config.max_commands_per_log {
            if commands.len() > max {
                return Err(CodeError::LogTooLarge {
                    max,
                    tried: commands.len(),
                });
            }
        }
        self.store.set_command_log(commands)
    }

    /// All stored command logs.
    pub fn command_logs(&self) -> Result<Vec<CommandLogRecord>> {
        self.store.command_logs()
    }

    /// All stored code entries.
    pub fn command_codes(&self) -> Result<Vec<CommandCodeRecord>> {
        self.store.command_codes()
    }

    /// The code table of a log, generating and storing it on first use.
    pub fn codes_for_log(&mut self, log_id: u64) -> Result<CodeTable> {
        if !self.store.contains_command_log(log_id)? {
            self.cache.remove(log_id);
            return Err(CodeError::UnknownCommandLog(log_id));
        }

        let store = &mut self.store;
        let generator = &self.generator;
        self.cache.get_or_generate(log_id, |id| {
            let stored = store.command_codes_for_log(id)?;
            if !stored.is_empty() {
                debug!(log_id = id, codes = stored.len(), "using stored command codes");
                return Ok(code_table_from_records(&stored));
            }

            let log = store
                .command_log(id)?
                .ok_or(CodeError::UnknownCommandLog(id))?;
            let codes = generator.generate(&log.commands);
            store.set_command_codes(id, &codes)?;
            info!(log_id = id, codes = codes.len(), "generated command codes");
            Ok(codes)
        })
    }

    /// The latest log and its code table.
    pub fn latest_codes(&mut self) -> Result<(CommandLogRecord, CodeTable)> {
        let log = self
            .store
            .latest_command_log()?
            .ok_or(CodeError::NoCommandLog)?;
        let codes = self.codes_for_log(log.id)?;
        Ok((log, codes))
    }

    /// The code of `command` in the most recently stored log.
    pub fn code_for_command(&mut self, command: &str) -> Result<Code> {
        let (_, codes) = self.latest_codes()?;
        codes
            .get(command)
            .cloned()
            .ok_or_else(|| CodeError::CommandNotFound(command.to_string()))
    }
}
