//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use trains_core::config::NetworkConfig;
use trains_core::error::Result;
use trains_core::graph::parse_routes;
use trains_core::network::Network;

/// Build the network from the discovered config file, then `--routes`
///
/// Routes given on the command line are applied last, so they overwrite
/// any configured distance for the same pair of cities.
pub fn load_network(cli: &Cli) -> Result<Network> {
    let mut network = match NetworkConfig::discover(cli.config.as_deref()) {
        Some(path) => {
            debug!(path = %path.display(), "network_config");
            NetworkConfig::load(&path)?.into_network()?
        }
        None => Network::new(),
    };

    if let Some(list) = &cli.routes {
        network.extend_routes(parse_routes(list)?);
    }

    debug!(
        routes = network.graph().len(),
        max_iterations = ?network.options().max_iterations,
        "load_network"
    );
    Ok(network)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_network(&self) -> Result<Network> {
        load_network(self.cli)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("trains {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Distances, trips and shortest routes over a route network.");
        println!();
        println!("Run `trains --help` for usage information.");
        Ok(())
    }
}
