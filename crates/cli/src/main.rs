//! Set-associative cache simulator CLI.
//!
//! This binary drives a trace of hex addresses through one simulated cache. It performs:
//! 1. **Configuration:** Builds the cache geometry from a JSON file, flags, or interactive prompts.
//! 2. **Simulation:** Classifies every trace entry as a hit or a miss, in order.
//! 3. **Reporting:** Prints the `Index/Tag/Hit-Miss` table (or JSON) and optional statistics.

mod prompt;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use cachesim_core::common::error::{ConfigError, SimError, TraceError};
use cachesim_core::config::CacheConfig;
use cachesim_core::sim::{ParseErrorPolicy, Simulator, report, trace};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Classify every address of a trace as a cache hit or miss.\n\nThe trace holds one hexadecimal address per line, optionally prefixed by a marker (x1A2B, 0x1A2B).\nGeometry comes from --config, overridden by individual flags; --interactive asks for everything.\n\nExamples:\n  cachesim trace.txt --address-bits 32 --block-size 16 --block-count 64 --associativity 2 --policy LRU\n  cachesim trace.txt --config l1.json --format json\n  cat trace.txt | cachesim --config l1.json --skip-invalid --stats\n  cachesim --interactive"
)]
struct Cli {
    /// Trace file, one hex address per line (`-` or omitted reads stdin).
    trace: Option<PathBuf>,

    /// JSON configuration file (fields: address_bits, block_size, block_count, associativity, policy).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Width of an address in bits.
    #[arg(long)]
    address_bits: Option<u32>,

    /// Block size in bytes (power of two).
    #[arg(long)]
    block_size: Option<u64>,

    /// Total number of blocks (power of two).
    #[arg(long)]
    block_count: Option<u64>,

    /// Ways per set; must divide the block count.
    #[arg(long)]
    associativity: Option<u64>,

    /// Replacement policy: LRU, MRU or LOOKAHEAD.
    #[arg(long)]
    policy: Option<String>,

    /// Output format for the per-access records.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Skip malformed trace lines instead of aborting.
    #[arg(long)]
    skip_invalid: bool,

    /// Print hit/miss statistics after the records.
    #[arg(long)]
    stats: bool,

    /// Prompt for every parameter and the trace path.
    #[arg(short, long, conflicts_with_all = ["trace", "config"])]
    interactive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Tab-separated `Index\tTag\tHit/Miss` table.
    Table,
    /// JSON array of `{index, tag, outcome}` objects.
    Json,
}

/// Failures reported by the CLI before exiting with status 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Rejected configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed simulation run.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// Unreadable trace.
    #[error("cannot read trace: {0}")]
    Trace(#[from] TraceError),

    /// Console I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A prompted value was not a number.
    #[error("{field} must be a non-negative integer, got `{value}`")]
    InvalidNumber {
        /// Parameter being asked for.
        field: &'static str,
        /// The answer as typed.
        value: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = execute(
        &cli,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    );
    process::exit(code);
}

/// Runs the CLI against the given streams and returns the process exit code.
///
/// A failure is reported on `err` as `[!] FATAL: <message>` with exit code 1.
fn execute<R: BufRead, W: Write, E: Write>(cli: &Cli, input: R, out: W, mut err: E) -> i32 {
    match run(cli, input, out, &mut err) {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "[!] FATAL: {e}");
            1
        }
    }
}

/// Installs the stderr log subscriber.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolves configuration and trace, runs the simulation, and prints the results.
///
/// # Arguments
///
/// * `cli` - Parsed arguments.
/// * `input` - Standard input: prompt answers and, when no trace file is named, the trace.
/// * `out` - Standard output: the records, plus statistics in table mode.
/// * `err` - Standard error: statistics in JSON mode, so `out` stays one JSON document.
fn run<R: BufRead, W: Write, E: Write>(
    cli: &Cli,
    mut input: R,
    mut out: W,
    mut err: E,
) -> Result<(), CliError> {
    let (config, trace_path) = if cli.interactive {
        let (config, path) = prompt::collect(&mut input, &mut out)?;
        (config, Some(path))
    } else {
        (resolve_config(cli)?, cli.trace.clone())
    };

    let lines = match trace_path.as_deref() {
        Some(path) if path != Path::new("-") => trace::load_trace(path)?,
        _ => trace::read_trace(&mut input)?,
    };

    let mut sim = Simulator::new(&config)?;
    info!(geometry = %sim.geometry(), policy = %config.policy, entries = lines.len(), "simulating");

    let on_error = if cli.skip_invalid {
        ParseErrorPolicy::Skip
    } else {
        ParseErrorPolicy::Abort
    };
    let records = sim.run(&lines, on_error)?;

    match cli.format {
        Format::Table => {
            report::write_table(&mut out, &records)?;
            if cli.stats {
                writeln!(out, "{}", sim.stats())?;
            }
        }
        Format::Json => {
            report::write_json(&mut out, &records)?;
            if cli.stats {
                writeln!(err, "{}", sim.stats())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Starts from the config file (or defaults) and applies individual flag overrides.
fn resolve_config(cli: &Cli) -> Result<CacheConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => CacheConfig::load(path)?,
        None => CacheConfig::default(),
    };
    if let Some(bits) = cli.address_bits {
        config.address_bits = bits;
    }
    if let Some(size) = cli.block_size {
        config.block_size = size;
    }
    if let Some(count) = cli.block_count {
        config.block_count = count;
    }
    if let Some(ways) = cli.associativity {
        config.associativity = ways;
    }
    if let Some(name) = &cli.policy {
        config.policy = name.parse()?;
    }
    Ok(config)
}
