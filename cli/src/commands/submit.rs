//! Submit command implementation.

use clap::Parser;

/// Submit command arguments.
#[derive(Parser)]
pub struct SubmitCommand {
    #[command(flatten)]
    pub store: super::StoreArgs,

    /// Command to include (repeat for each command in order)
    #[arg(short, long = "command", conflicts_with = "input")]
    pub commands: Vec<String>,

    /// Path to a command log file ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Treat each input line as one command
    #[arg(long, default_value_t = false)]
    pub lines: bool,
}

use anyhow::Result as AnyhowResult;
use cmdcode_service::{CommandParser, InputFormat};

pub fn run(cmd: SubmitCommand) -> AnyhowResult<()> {
    let commands = match &cmd.input {
        Some(path) => {
            let text = super::read_input(path)?;
            let format = if cmd.lines {
                InputFormat::Lines
            } else {
                InputFormat::Auto
            };
            CommandParser::new(format).parse(&text)?
        }
        None => cmd.commands,
    };

    let mut service = cmd.store.open_service()?;
    let record = service.submit_log(commands)?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
