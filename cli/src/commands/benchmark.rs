//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Parser)]
pub struct BenchmarkCommand {
    /// Path to a command log file
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,

    /// Count frequencies on one thread
    #[arg(long, default_value_t = false)]
    pub sequential: bool,
}

use anyhow::{bail, Result as AnyhowResult};
use cmdcode_codegen::{CodeGenerator, GeneratorConfig};
use cmdcode_service::CommandParser;
use std::hint::black_box;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    if cmd.iterations == 0 {
        bail!("iterations must be at least 1");
    }

    let text = super::read_input(&cmd.input)?;
    let commands = CommandParser::auto().parse(&text)?;

    let config = GeneratorConfig::builder().parallel(!cmd.sequential).build();
    let generator = CodeGenerator::new(config);

    println!("Benchmarking code generation...");
    println!("  Commands: {}", commands.len());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    // Warmup
    let codes = generator.generate(&commands);

    let start = Instant::now();
    for _ in 0..cmd.iterations {
        black_box(generator.generate(black_box(&commands)));
    }
    let elapsed = start.elapsed();

    let avg_time_ns = elapsed.as_nanos() / cmd.iterations as u128;
    let avg_time_ms = avg_time_ns as f64 / 1_000_000.0;
    let throughput = if avg_time_ns > 0 {
        commands.len() as f64 * 1_000_000_000.0 / avg_time_ns as f64
    } else {
        0.0
    };

    println!("Results:");
    println!("  Distinct commands: {}", codes.len());
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_time_ms);
    println!("  Throughput: {:.0} commands/s", throughput);

    Ok(())
}
