//! JSON file backed command log store.
//!
//! The whole store lives in one `store.json` file inside a directory. It is
//! read once when the store is opened and rewritten after every change.

use super::format::{StoreData, FORMAT_VERSION};
use super::{CommandCodeRecord, CommandLogRecord, Storage, StoreState};
use cmdcode_core::{CodeError, CodeTable, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the store file inside the store directory.
pub const STORE_FILE: &str = "store.json";

/// Command log store persisted as pretty-printed JSON.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Directory holding the store file
    dir: PathBuf,
    state: StoreState,
}

impl JsonFileStore {
    /// Open the store in `dir`, keeping at most `max_logs` logs.
    ///
    /// A missing directory or file opens an empty store; nothing is written
    /// until the first change.
    pub fn open(dir: impl Into<PathBuf>, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        let file_path = dir.join(STORE_FILE);

        let data = if file_path.exists() {
            Self::load(&file_path)?
        } else {
            debug!(path = %file_path.display(), "no store file yet, starting empty");
            StoreData::default()
        };

        Ok(Self {
            dir,
            state: StoreState::from_data(data, max_logs),
        })
    }

    /// The store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the store file.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(STORE_FILE)
    }

    fn load(file_path: &Path) -> Result<StoreData> {
        let file = File::open(file_path).map_err(|err| CodeError::Io {
            path: file_path.to_path_buf(),
            err,
        })?;

        let reader = BufReader::new(file);
        let data: StoreData = serde_json::from_reader(reader).map_err(|e| {
            CodeError::Load(format!(
                "Failed to deserialize store {}: {}",
                file_path.display(),
                e
            ))
        })?;

        if data.version != FORMAT_VERSION {
            return Err(CodeError::Load(format!(
                "Unsupported store version {} in {} (expected {})",
                data.version,
                file_path.display(),
                FORMAT_VERSION
            )));
        }

        debug!(
            path = %file_path.display(),
            logs = data.logs.len(),
            codes = data.codes.len(),
            "loaded store"
        );
        Ok(data)
    }

    /// Write `data`, replacing the store file atomically.
    fn save(&self, data: &StoreData) -> Result<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            CodeError::Save(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let file_path = self.file_path();
        let tmp_path = self.dir.join(format!("{STORE_FILE}.tmp"));
        let file = File::create(&tmp_path).map_err(|e| {
            CodeError::Save(format!(
                "Failed to create file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| CodeError::Save(format!("Failed to serialize store: {}", e)))?;
        writer.flush().map_err(|err| CodeError::Io {
            path: tmp_path.clone(),
            err,
        })?;

        std::fs::rename(&tmp_path, &file_path).map_err(|e| {
            CodeError::Save(format!(
                "Failed to replace {}: {}",
                file_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

impl Storage for JsonFileStore {
    fn set_command_log(&mut self, commands: Vec<String>) -> Result<CommandLogRecord> {
        // Changes become visible only once they are on disk
        let mut next = self.state.clone();
        let record = next.insert_log(commands);
        self.save(next.data())?;
        self.state = next;
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
        let mut next = self.state.clone();
        let (records, written) = next.insert_codes(log_id, codes)?;
        if written {
            self.save(next.data())?;
            self.state = next;
            info!(log_id, codes = records.len(), "stored command codes");
        }
        Ok(records)
    }
}
