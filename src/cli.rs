//! CLI argument parsing for trains
//!
//! Global flags: --routes, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use trains_core::format::OutputFormat;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Trains - answer questions about a directed, weighted route network
#[derive(Parser, Debug)]
#[command(name = "trains")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Route list, e.g. "AB5, BC4, Alpha-Beta:12"
    #[arg(long, global = true, env = "TRAINS_ROUTES")]
    pub routes: Option<String>,

    /// Network file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "trains_core=trace")
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Distance along an exact sequence of cities
    Distance {
        /// Cities in travel order
        #[arg(required = true, num_args = 1..)]
        cities: Vec<String>,
    },

    /// Enumerate trips between two cities
    Trips(TripsArgs),

    /// Shortest trip between two cities
    Shortest {
        /// Origin city
        from: String,
        /// Destination city
        to: String,
    },

    /// Answer the ten standard questions about the network
    Exam,
}

#[derive(Args, Debug, Clone)]
pub struct TripsArgs {
    /// Origin city
    pub from: String,

    /// Destination city
    pub to: String,

    /// Allow at most this many stops (cities may repeat)
    #[arg(long)]
    pub max_stops: Option<usize>,

    /// Require exactly this many stops (cities may repeat)
    #[arg(long)]
    pub exact_stops: Option<usize>,

    /// Only trips shorter than this distance (cities may repeat)
    #[arg(long)]
    pub max_distance: Option<u32>,
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Accept a bare level or a full `target=level` directive
pub fn parse_log_level(s: &str) -> std::result::Result<String, String> {
    let level = s.to_lowercase();
    if level.contains('=') || LOG_LEVELS.contains(&level.as_str()) {
        Ok(level)
    } else {
        Err(format!(
            "invalid log level: {} (expected one of: {})",
            s,
            LOG_LEVELS.join(", ")
        ))
    }
}
