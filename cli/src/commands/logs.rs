//! Logs command implementation.

use clap::Parser;

/// Logs command arguments.
#[derive(Parser)]
pub struct LogsCommand {
    #[command(flatten)]
    pub store: super::StoreArgs,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: LogsCommand) -> AnyhowResult<()> {
    let service = cmd.store.open_service()?;
    let logs = service.command_logs()?;

    println!("{}", serde_json::to_string_pretty(&logs)?);
    Ok(())
}
