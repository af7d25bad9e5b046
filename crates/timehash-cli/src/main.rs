//! `timehash` CLI: encode, decode, and navigate time hashes from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode epoch seconds or an RFC 3339 datetime (default precision 10)
//! timehash encode 1700000000
//! timehash encode 2023-11-14T22:13:20Z -p 6
//!
//! # Decode to center and error, or to a JSON report
//! timehash decode bafbed1fe1
//! timehash decode bafbed --json
//!
//! # Check a hash against the alphabet (exit code 1 when invalid)
//! timehash validate bafbed
//!
//! # Neighbouring cells
//! timehash before a100
//! timehash expand a100
//!
//! # Every hash between two bounds, one per line
//! timehash range a0fe a101
//!
//! # Resolution of each precision
//! timehash precision -p 12
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process;
use timehash::{TimeHash, DEFAULT_PRECISION};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "timehash",
    version,
    about = "Sortable time hashes: encode, decode, and navigate"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a timestamp (epoch seconds or RFC 3339) into a time hash
    Encode {
        /// Epoch seconds (e.g. 1700000000.5) or RFC 3339 datetime
        #[arg(allow_negative_numbers = true)]
        timestamp: String,
        /// Number of characters in the hash
        #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
        precision: usize,
    },
    /// Decode a time hash into its center timestamp and error
    Decode {
        hash: String,
        /// Print a JSON report instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Check that every character of a hash is in the alphabet
    Validate { hash: String },
    /// Print the preceding hash at the same precision
    Before { hash: String },
    /// Print the following hash at the same precision
    After { hash: String },
    /// Print the preceding and following hashes
    Neighbors { hash: String },
    /// Print the preceding hash, the hash itself, and the following hash
    Expand { hash: String },
    /// Print every hash from START through END inclusive
    Range { start: String, end: String },
    /// Show the ± error of each precision
    Precision {
        /// Highest precision to list
        #[arg(short, long, default_value_t = 12)]
        precision: usize,
    },
}

/// JSON shape printed by `decode --json`.
#[derive(Serialize)]
struct DecodeReport {
    hash: String,
    center: f64,
    error: f64,
    start: f64,
    end: f64,
    datetime: Option<String>,
}

impl From<&TimeHash> for DecodeReport {
    fn from(th: &TimeHash) -> Self {
        Self {
            hash: th.hash_code().to_string(),
            center: th.center(),
            error: th.error(),
            start: th.start(),
            end: th.end(),
            datetime: th.center_datetime().map(|dt| dt.to_rfc3339()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encode {
            timestamp,
            precision,
        } => {
            let hash = match timestamp.trim().parse::<f64>() {
                Ok(seconds) => {
                    debug!(seconds, precision, "encoding epoch seconds");
                    timehash::encode(seconds, precision)
                }
                Err(_) => {
                    let datetime = parse_datetime(&timestamp)?;
                    debug!(%datetime, precision, "encoding datetime");
                    timehash::encode_datetime(&datetime, precision)
                }
            }
            .with_context(|| format!("Failed to encode timestamp: {}", timestamp))?;
            println!("{}", hash);
        }
        Commands::Decode { hash, json } => {
            let th = TimeHash::from_hash(&hash)
                .with_context(|| format!("Failed to decode hash: {}", hash))?;
            if json {
                let report = DecodeReport::from(&th);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("center: {}", th.center());
                println!("error:  {}", th.error());
            }
        }
        Commands::Validate { hash } => {
            if timehash::validate(&hash) {
                println!("valid");
            } else {
                println!("invalid");
                process::exit(1);
            }
        }
        Commands::Before { hash } => {
            let prev = timehash::before(&hash)
                .with_context(|| format!("Failed to find the hash before: {}", hash))?;
            println!("{}", prev);
        }
        Commands::After { hash } => {
            let next = timehash::after(&hash)
                .with_context(|| format!("Failed to find the hash after: {}", hash))?;
            println!("{}", next);
        }
        Commands::Neighbors { hash } => {
            let (prev, next) = timehash::neighbors(&hash)
                .with_context(|| format!("Failed to find neighbours of: {}", hash))?;
            println!("{}\n{}", prev, next);
        }
        Commands::Expand { hash } => {
            let cells = timehash::expand(&hash)
                .with_context(|| format!("Failed to expand: {}", hash))?;
            println!("{}", cells.join("\n"));
        }
        Commands::Range { start, end } => {
            let hashes = timehash::range(&start, &end)
                .with_context(|| format!("Failed to build range {}..={}", start, end))?;
            for hash in hashes {
                println!("{}", hash);
            }
        }
        Commands::Precision { precision } => {
            for p in 1..=precision {
                println!("{:>3}  ±{} s", p, timehash::error_for_precision(p));
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn parse_datetime(raw: &str) -> Result<DateTime<Utc>> {
    let datetime = DateTime::parse_from_rfc3339(raw.trim())
        .with_context(|| format!("Not epoch seconds or an RFC 3339 datetime: {}", raw))?;
    Ok(datetime.with_timezone(&Utc))
}
