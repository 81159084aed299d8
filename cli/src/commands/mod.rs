//! CLI commands for cmdcode.

pub mod benchmark;
pub mod codes;
pub mod generate;
pub mod logs;
pub mod lookup;
pub mod submit;

pub use benchmark::BenchmarkCommand;
pub use codes::CodesCommand;
pub use generate::GenerateCommand;
pub use logs::LogsCommand;
pub use lookup::LookupCommand;
pub use submit::SubmitCommand;

use anyhow::{Context, Result as AnyhowResult};
use clap::Args;
use cmdcode_service::{CommandCodeService, JsonFileStore, ServiceConfig};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Options shared by the commands that use the command log store.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Directory holding the store file
    #[arg(short, long, env = "CMDCODE_STORE", default_value = "./cmdcode-data")]
    pub store: PathBuf,

    /// Maximum number of command logs to keep
    #[arg(long, default_value_t = 100)]
    pub max_logs: usize,
}

impl StoreArgs {
    /// Open the store and wrap it in a lookup service.
    pub fn open_service(&self) -> AnyhowResult<CommandCodeService<JsonFileStore>> {
        let config = ServiceConfig::builder().max_logs(self.max_logs).build()?;
        let store = JsonFileStore::open(&self.store, config.max_logs)
            .with_context(|| format!("failed to open store in {}", self.store.display()))?;
        debug!(
            store = %self.store.display(),
            max_logs = config.max_logs,
            "opened command log store"
        );
        Ok(CommandCodeService::new(store, config)?)
    }
}

/// Read input text from a file, or from stdin if `path` is "-".
pub fn read_input(path: &str) -> AnyhowResult<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
    }
}
