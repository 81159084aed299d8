//! Generate command implementation.

use clap::Parser;

/// Generate command arguments.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Command to include (repeat for each command in order)
    #[arg(short, long = "command", conflicts_with = "input")]
    pub commands: Vec<String>,

    /// Path to a command log file ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Treat each input line as one command
    #[arg(long, default_value_t = false)]
    pub lines: bool,

    /// Give a lone command the code "0" instead of the empty code
    #[arg(long, default_value_t = false)]
    pub single_zero: bool,

    /// Count frequencies on one thread
    #[arg(long, default_value_t = false)]
    pub sequential: bool,

    /// Also print code length statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,
}

use anyhow::Result as AnyhowResult;
use cmdcode_codegen::{CodeGenerator, GeneratorConfig, SingleSymbolPolicy};
use cmdcode_service::{CommandParser, InputFormat};

pub fn run(cmd: GenerateCommand) -> AnyhowResult<()> {
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

    let policy = if cmd.single_zero {
        SingleSymbolPolicy::Zero
    } else {
        SingleSymbolPolicy::Empty
    };
    let config = GeneratorConfig::builder()
        .parallel(!cmd.sequential)
        .single_symbol(policy)
        .build();

    let generator = CodeGenerator::new(config);
    let (frequencies, codes) = generator.generate_with_frequencies(&commands);

    let output = if cmd.stats {
        serde_json::json!({
            "codes": codes,
            "stats": codes.stats(&frequencies),
        })
    } else {
        serde_json::to_value(&codes)?
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
