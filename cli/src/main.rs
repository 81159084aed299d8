//! cmdcode CLI - Command-line interface for command code generation.
//!
//! This is the main entry point for the `cmdcode` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{
    BenchmarkCommand, CodesCommand, GenerateCommand, LogsCommand, LookupCommand, SubmitCommand,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cmdcode")]
#[command(about = "Prefix codes for command sequences", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter, e.g. "info" or "cmdcode_service=debug"
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate codes for a command sequence
    Generate(GenerateCommand),
    /// Store a command log
    Submit(SubmitCommand),
    /// Look up a command's code in the latest command log
    Lookup(LookupCommand),
    /// List stored command logs
    Logs(LogsCommand),
    /// List stored command codes
    Codes(CodesCommand),
    /// Benchmark code generation
    Benchmark(BenchmarkCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log)?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate(cmd) => commands::generate::run(cmd)?,
        Commands::Submit(cmd) => commands::submit::run(cmd)?,
        Commands::Lookup(cmd) => commands::lookup::run(cmd)?,
        Commands::Logs(cmd) => commands::logs::run(cmd)?,
        Commands::Codes(cmd) => commands::codes::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
