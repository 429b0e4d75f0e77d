//! `trains shortest` - shortest trip between two cities

use crate::cli::{Cli, OutputFormat};
use trains_core::error::Result;
use trains_core::format::{human_trip_line, record_header, record_trip_line};
use trains_core::network::Network;

/// Execute the shortest command
pub fn execute(cli: &Cli, network: &Network, from: &str, to: &str) -> Result<()> {
    let trip = network.shortest_distance_trip(from, to)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&trip)?),
        OutputFormat::Human => println!("{}", human_trip_line(&trip)),
        OutputFormat::Records => {
            println!(
                "{}",
                record_header(
                    "shortest",
                    &[("from", from.to_string()), ("to", to.to_string())]
                )
            );
            println!("{}", record_trip_line(&trip));
        }
    }

    Ok(())
}
