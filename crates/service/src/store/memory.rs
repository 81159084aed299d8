//! In-process command log store.

use super::{CommandCodeRecord, CommandLogRecord, Storage, StoreState};
use cmdcode_core::{CodeTable, Result};
use tracing::info;

/// Keeps logs and codes in memory for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    state: StoreState,
}

impl MemoryStore {
    /// Create an empty store that keeps at most `max_logs` logs.
    pub fn new(max_logs: usize) -> Self {
        Self {
            state: StoreState::new(max_logs),
        }
    }
}

impl Storage for MemoryStore {
    fn set_command_log(&mut self, commands: Vec<String>) -> Result<CommandLogRecord> {
        let record = self.state.insert_log(commands);
        info!(id = record.id, commands = record.commands.len(), "stored command log");
        Ok(record)
    }

    fn command_logs(&self) -> Result<Vec<CommandLogRecord>> {
        Ok(self.state.data().logs.clone())
    }

    fn command_codes(&self) -> Result<Vec<CommandCodeRecord>> {
        Ok(self.state.data().codes.clone())
    }

    fn command_log(&self, log_id: u64) -> Result<Option<CommandLogRecord>> {
        Ok(self.state.log(log_id).cloned())
    }

    fn contains_command_log(&self, log_id: u64) -> Result<bool> {
        Ok(self.state.log(log_id).is_some())
    }

    fn latest_command_log(&self) -> Result<Option<CommandLogRecord>> {
        Ok(self.state.latest_log().cloned())
    }

    fn command_codes_for_log(&self, log_id: u64) -> Result<Vec<CommandCodeRecord>> {
        self.state.codes_for_log(log_id)
    }

    fn set_command_codes(
        &mut self,
        log_id: u64,
        codes: &CodeTable,
    ) -> Result<Vec<CommandCodeRecord>> {
        let (records, written) = self.state.insert_codes(log_id, codes)?;
        if written {
            info!(log_id, codes = records.len(), "stored command codes");
        }
        Ok(records)
    }
}
