//! `trains distance` - distance along an exact sequence of cities

use crate::cli::{Cli, OutputFormat};
use trains_core::error::Result;
use trains_core::format::record_header;
use trains_core::network::Network;

/// Execute the distance command
pub fn execute(cli: &Cli, network: &Network, cities: &[String]) -> Result<()> {
    let stops: Vec<&str> = cities.iter().map(String::as_str).collect();
    let distance = network.route_distance(&stops)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "cities": stops,
                "distance": distance,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", distance),
        OutputFormat::Records => {
            println!(
                "{}",
                record_header("distance", &[("route", stops.join("-"))])
            );
            println!("D {}", distance);
        }
    }

    Ok(())
}
