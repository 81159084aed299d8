//! Record definitions for stored command logs and codes.
//!
//! These are the shapes written to the store file and printed by the CLI.

use chrono::{DateTime, Utc};
use cmdcode_core::{Code, CodeTable};
use serde::{Deserialize, Serialize};

/// Store file format version.
pub const FORMAT_VERSION: &str = "1";

/// A submitted command log, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLog {
    pub commands: Vec<String>,
}

/// A stored command log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLogRecord {
    /// Store-assigned id, never reused
    pub id: u64,
    /// The commands in submission order
    pub commands: Vec<String>,
    /// When the log was stored
    pub timestamp: DateTime<Utc>,
}

/// One stored (command, code) entry of a log's code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCodeRecord {
    /// Store-assigned id, never reused
    pub id: u64,
    /// The log the code was generated for
    pub command_log_id: u64,
    pub command: String,
    pub code: Code,
}

/// Answer to a single-command lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCodeOnly {
    #[serde(rename = "rcr")]
    pub code: Code,
}

/// Everything a store holds, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    /// Format version
    pub version: String,
    /// Next id handed to a command log
    pub next_log_id: u64,
    /// Next id handed to a code entry
    pub next_code_id: u64,
    /// Logs in ascending id order
    pub logs: Vec<CommandLogRecord>,
    /// Code entries in ascending id order
    pub codes: Vec<CommandCodeRecord>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            next_log_id: 1,
            next_code_id: 1,
            logs: Vec::new(),
            codes: Vec::new(),
        }
    }
}

/// Rebuild a code table from stored entries.
pub fn code_table_from_records(records: &[CommandCodeRecord]) -> CodeTable {
    records
        .iter()
        .map(|r| (r.command.as_str().into(), r.code.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_log_shape() {
        let log: CommandLog =
            serde_json::from_str(r#"{"commands": ["LEFT", "GRAB", "LEFT"]}"#).unwrap();
        assert_eq!(log.commands, vec!["LEFT", "GRAB", "LEFT"]);
    }

    #[test]
    fn test_lookup_answer_shape() {
        let answer = CommandCodeOnly {
            code: Code::parse("01").unwrap(),
        };
        assert_eq!(serde_json::to_string(&answer).unwrap(), r#"{"rcr":"01"}"#);
    }

    #[test]
    fn test_store_data_roundtrip() {
        let data = StoreData {
            logs: vec![CommandLogRecord {
                id: 1,
                commands: vec!["LEFT".to_string()],
                timestamp: Utc::now(),
            }],
            codes: vec![CommandCodeRecord {
                id: 1,
                command_log_id: 1,
                command: "LEFT".to_string(),
                code: Code::new(),
            }],
            next_log_id: 2,
            next_code_id: 2,
            ..Default::default()
        };

        let json = serde_json::to_string(&data).unwrap();
        let loaded: StoreData = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_code_table_from_records() {
        let records = vec![
            CommandCodeRecord {
                id: 1,
                command_log_id: 3,
                command: "LEFT".to_string(),
                code: Code::parse("1").unwrap(),
            },
            CommandCodeRecord {
                id: 2,
                command_log_id: 3,
                command: "GRAB".to_string(),
                code: Code::parse("0").unwrap(),
            },
        ];

        let table = code_table_from_records(&records);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("LEFT").map(Code::as_str), Some("1"));
    }
}
