//! stationstats CLI
//!
//! Reads a `key;value` measurements file and prints `key: min/mean/max` for
//! every key in ascending key order.
//!
//! ## Usage
//!
//! ```bash
//! # Default input path
//! stationstats
//!
//! # Explicit file, keep going past malformed lines
//! stationstats data/measurements.txt --on-malformed skip
//!
//! # Memory-map the input (it must not change during the run), verbose logging
//! RUST_LOG=debug stationstats data/measurements.txt --reader mmap
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use stationstats::driver::{Driver, MalformedPolicy, RunSummary};
use stationstats::report::{Reporter, DEFAULT_PRECISION};
use stationstats::source::{BufReadSource, MmapSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stationstats")]
#[command(author, version, about = "Per-key min/mean/max over a key;value file")]
struct Cli {
    /// Input file, one `<key>;<value>` record per line
    #[arg(default_value = "data/measurements.txt")]
    path: PathBuf,

    /// Policy for lines that fail to parse
    #[arg(long, value_enum, default_value_t = OnMalformed::Abort)]
    on_malformed: OnMalformed,

    /// How the input file is read; `mmap` requires the file to stay unchanged
    #[arg(long, value_enum, default_value_t = ReaderKind::Buffered)]
    reader: ReaderKind,

    /// Decimal digits per printed number
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Expected number of distinct keys, used to presize the table
    #[arg(long, default_value_t = 10_000)]
    keys: usize,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OnMalformed {
    Abort,
    Skip,
}

impl From<OnMalformed> for MalformedPolicy {
    fn from(value: OnMalformed) -> Self {
        match value {
            OnMalformed::Abort => MalformedPolicy::Abort,
            OnMalformed::Skip => MalformedPolicy::Skip,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReaderKind {
    Buffered,
    Mmap,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    info!(path = %cli.path.display(), reader = ?cli.reader, "processing");
    let start = Instant::now();

    let driver = Driver::new(cli.on_malformed.into()).with_capacity(cli.keys);
    let summary = run(&driver, &cli)
        .with_context(|| format!("Failed to process {}", cli.path.display()))?;

    let lines = Reporter::with_precision(cli.precision).format(&summary.table.into_snapshot());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    info!(
        lines = summary.lines,
        skipped = summary.skipped,
        keys = lines.len(),
        elapsed = ?start.elapsed(),
        "done"
    );

    Ok(())
}

fn run(driver: &Driver, cli: &Cli) -> Result<RunSummary> {
    let summary = match cli.reader {
        ReaderKind::Mmap => {
            // SAFETY: opted into with `--reader mmap`, whose help text states
            // that the input must not change during the run.
            let source =
                unsafe { MmapSource::open(&cli.path) }.context("Failed to map input file")?;
            driver.run(source)?
        }
        ReaderKind::Buffered => {
            let file = File::open(&cli.path).context("Failed to open input file")?;
            driver.run(BufReadSource::new(BufReader::with_capacity(1 << 20, file)))?
        }
    };
    Ok(summary)
}
