//! Output format handling for trains
//!
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented format for scripts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrainsError;
use crate::explorer::TripSet;
use crate::trip::Trip;

/// Output format for trains commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = TrainsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(TrainsError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Human line for a trip, e.g. `CDC (distance 16, 2 stops)`
pub fn human_trip_line(trip: &Trip) -> String {
    let unit = if trip.stops() == 1 { "stop" } else { "stops" };
    format!(
        "{} (distance {}, {} {})",
        trip.canonical(),
        trip.distance(),
        trip.stops(),
        unit
    )
}

/// Record line for a trip, e.g. `T CDC distance=16 stops=2`
pub fn record_trip_line(trip: &Trip) -> String {
    format!(
        "T {} distance={} stops={}",
        trip.canonical(),
        trip.distance(),
        trip.stops()
    )
}

/// Records header line: `H trains=1 records=1 mode=<mode> [key=value ...]`
pub fn record_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H trains=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Render a trip set in the requested format
pub fn render_trips(
    format: OutputFormat,
    mode: &str,
    from: &str,
    to: &str,
    trips: &TripSet,
) -> Result<String, TrainsError> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "from": from,
            "to": to,
            "count": trips.len(),
            "truncated": trips.truncated(),
            "trips": trips,
        }))?,
        OutputFormat::Human => {
            if trips.is_empty() {
                format!("No trips from {} to {}", from, to)
            } else {
                trips
                    .iter()
                    .map(human_trip_line)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        OutputFormat::Records => {
            let mut lines = vec![record_header(
                mode,
                &[
                    ("from", from.to_string()),
                    ("to", to.to_string()),
                    ("count", trips.len().to_string()),
                    ("truncated", trips.truncated().to_string()),
                ],
            )];
            lines.extend(trips.iter().map(record_trip_line));
            lines.join("\n")
        }
    };
    Ok(out)
}
