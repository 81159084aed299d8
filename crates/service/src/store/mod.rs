//! Storage for command logs and their generated codes.
//!
//! This module defines the [`Storage`] trait used by the lookup service and
//! two implementations: an in-process [`MemoryStore`] and a [`JsonFileStore`]
//! that persists to a single JSON file.

pub mod file;
pub mod format;
pub mod memory;

pub use file::JsonFileStore;
pub use format::{
    code_table_from_records, CommandCodeOnly, CommandCodeRecord, CommandLog, CommandLogRecord,
    StoreData, FORMAT_VERSION,
};
pub use memory::MemoryStore;

use chrono::Utc;
use cmdcode_core::{CodeError, CodeTable, Result};
use tracing::warn;

/// Persistence for command logs and generated code tables.
pub trait Storage {
    /// Store a command log, assigning it an id and timestamp.
    fn set_command_log(&mut self, commands: Vec<String>) -> Result<CommandLogRecord>;

    /// All stored logs in ascending id order.
    fn command_logs(&self) -> Result<Vec<CommandLogRecord>>;

    /// All stored code entries in ascending id order.
    fn command_codes(&self) -> Result<Vec<CommandCodeRecord>>;

    /// A log by id.
    fn command_log(&self, log_id: u64) -> Result<Option<CommandLogRecord>>;

    /// Whether a log with this id is stored.
    fn contains_command_log(&self, log_id: u64) -> Result<bool>;

    /// The most recently stored log.
    fn latest_command_log(&self) -> Result<Option<CommandLogRecord>>;

    /// Code entries stored for a log; empty if none were generated yet.
    fn command_codes_for_log(&self, log_id: u64) -> Result<Vec<CommandCodeRecord>>;

    /// Store the code table generated for a log.
    ///
    /// If the log already has codes, those are returned unchanged.
    fn set_command_codes(&mut self, log_id: u64, codes: &CodeTable)
        -> Result<Vec<CommandCodeRecord>>;
}

/// Store contents plus the retention cap, shared by both stores.
#[derive(Debug, Clone)]
pub(crate) struct StoreState {
    data: StoreData,
    max_logs: usize,
}

impl StoreState {
    pub(crate) fn new(max_logs: usize) -> Self {
        Self::from_data(StoreData::default(), max_logs)
    }

    pub(crate) fn from_data(mut data: StoreData, max_logs: usize) -> Self {
        data.logs.sort_by_key(|log| log.id);
        data.codes.sort_by_key(|code| code.id);
        let mut state = Self { data, max_logs };
        state.evict_oldest();
        state
    }

    pub(crate) fn data(&self) -> &StoreData {
        &self.data
    }

    pub(crate) fn insert_log(&mut self, commands: Vec<String>) -> CommandLogRecord {
        let record = CommandLogRecord {
            id: self.data.next_log_id,
            commands,
            timestamp: Utc::now(),
        };
        self.data.next_log_id += 1;
        self.data.logs.push(record.clone());
        self.evict_oldest();
        record
    }

    pub(crate) fn log(&self, log_id: u64) -> Option<&CommandLogRecord> {
        self.data
            .logs
            .binary_search_by_key(&log_id, |log| log.id)
            .ok()
            .map(|pos| &self.data.logs[pos])
    }

    pub(crate) fn latest_log(&self) -> Option<&CommandLogRecord> {
        self.data
            .logs
            .iter()
            .max_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)))
    }

    pub(crate) fn codes_for_log(&self, log_id: u64) -> Result<Vec<CommandCodeRecord>> {
        if self.log(log_id).is_none() {
            return Err(CodeError::UnknownCommandLog(log_id));
        }
        Ok(self
            .data
            .codes
            .iter()
            .filter(|code| code.command_log_id == log_id)
            .cloned()
            .collect())
    }

    /// Returns the stored entries and whether anything new was written.
    pub(crate) fn insert_codes(
        &mut self,
        log_id: u64,
        codes: &CodeTable,
    ) -> Result<(Vec<CommandCodeRecord>, bool)> {
        let existing = self.codes_for_log(log_id)?;
        if !existing.is_empty() {
            return Ok((existing, false));
        }

        let mut inserted = Vec::with_capacity(codes.len());
        for (command, code) in codes.iter() {
            let record = CommandCodeRecord {
                id: self.data.next_code_id,
                command_log_id: log_id,
                command: command.to_string(),
                code: code.clone(),
            };
            self.data.next_code_id += 1;
            inserted.push(record);
        }
        self.data.codes.extend(inserted.iter().cloned());

        let written = !inserted.is_empty();
        Ok((inserted, written))
    }

    fn evict_oldest(&mut self) {
        if self.data.logs.len() <= self.max_logs {
            return;
        }
        let excess = self.data.logs.len() - self.max_logs;
        let evicted: Vec<u64> = self.data.logs.drain(..excess).map(|log| log.id).collect();
        self.data
            .codes
            .retain(|code| !evicted.contains(&code.command_log_id));
        warn!(
            evicted = evicted.len(),
            max_logs = self.max_logs,
            "command log limit reached, dropped oldest logs and their codes"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdcode_codegen::generate_codes;

    fn commands(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ids_increase() {
        let mut state = StoreState::new(10);
        let a = state.insert_log(commands(&["LEFT"]));
        let b = state.insert_log(commands(&["GRAB"]));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(state.latest_log().map(|l| l.id), Some(2));
    }

    #[test]
    fn test_eviction_drops_codes() {
        let mut state = StoreState::new(2);
        let first = state.insert_log(commands(&["LEFT", "GRAB"]));
        let codes = generate_codes(&first.commands);
        state.insert_codes(first.id, &codes).unwrap();
        assert_eq!(state.data().codes.len(), 2);

        state.insert_log(commands(&["BACK"]));
        state.insert_log(commands(&["UP"]));

        assert_eq!(state.data().logs.len(), 2);
        assert!(state.log(first.id).is_none());
        assert!(state.data().codes.is_empty());
        assert!(matches!(
            state.codes_for_log(first.id),
            Err(CodeError::UnknownCommandLog(1))
        ));
    }

    #[test]
    fn test_codes_written_once() {
        let mut state = StoreState::new(10);
        let log = state.insert_log(commands(&["LEFT", "GRAB", "LEFT"]));
        let codes = generate_codes(&log.commands);

        let (first, written) = state.insert_codes(log.id, &codes).unwrap();
        assert!(written);
        assert_eq!(first.len(), 2);

        let other = generate_codes(&["X", "Y", "Z"]);
        let (second, written) = state.insert_codes(log.id, &other).unwrap();
        assert!(!written);
        assert_eq!(first, second);
    }

    #[test]
    fn test_codes_for_unknown_log() {
        let mut state = StoreState::new(10);
        assert!(state.codes_for_log(9).is_err());
        assert!(state.insert_codes(9, &CodeTable::new()).is_err());
    }

    #[test]
    fn test_loaded_data_over_cap_is_trimmed() {
        let mut data = StoreData::default();
        for id in 1..=5 {
            data.logs.push(CommandLogRecord {
                id,
                commands: commands(&["LEFT"]),
                timestamp: Utc::now(),
            });
        }
        data.next_log_id = 6;

        let state = StoreState::from_data(data, 3);
        let ids: Vec<u64> = state.data().logs.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }
}
