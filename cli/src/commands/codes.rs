//! Codes command implementation.

use clap::Parser;

/// Codes command arguments.
#[derive(Parser)]
pub struct CodesCommand {
    #[command(flatten)]
    pub store: super::StoreArgs,

    /// Only show the code table of this log, generating it if needed
    #[arg(long = "log-id")]
    pub log_id: Option<u64>,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: CodesCommand) -> AnyhowResult<()> {
    let mut service = cmd.store.open_service()?;

    let output = match cmd.log_id {
        Some(log_id) => serde_json::to_string_pretty(&service.codes_for_log(log_id)?)?,
        None => serde_json::to_string_pretty(&service.command_codes()?)?,
    };

    println!("{}", output);
    Ok(())
}
