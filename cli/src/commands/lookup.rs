//! Lookup command implementation.

use clap::Parser;

/// Lookup command arguments.
#[derive(Parser)]
pub struct LookupCommand {
    #[command(flatten)]
    pub store: super::StoreArgs,

    /// Command to look up in the latest command log
    pub command: String,
}

use anyhow::Result as AnyhowResult;
use cmdcode_service::CommandCodeOnly;

pub fn run(cmd: LookupCommand) -> AnyhowResult<()> {
    let mut service = cmd.store.open_service()?;
    let code = service.code_for_command(&cmd.command)?;

    println!("{}", serde_json::to_string(&CommandCodeOnly { code })?);
    Ok(())
}
