//! Command implementations for all trains commands

use crate::cli::{Commands, TripsArgs};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::trace_command;
use crate::commands::{distance, exam, shortest, trips};
use trains_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Distance { cities } => execute_distance(ctx, cities),
            Commands::Trips(args) => execute_trips(ctx, args),
            Commands::Shortest { from, to } => execute_shortest(ctx, from, to),
            Commands::Exam => execute_exam(ctx),
        }
    }
}

fn execute_distance(ctx: &CommandContext, cities: &[String]) -> Result<()> {
    let network = ctx.load_network()?;
    trace_command!(ctx.cli, ctx.start, "load_network");
    distance::execute(ctx.cli, &network, cities)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_trips(ctx: &CommandContext, args: &TripsArgs) -> Result<()> {
    // Reject conflicting constraints before touching the network
    let query = trips::query_from_args(args)?;
    let network = ctx.load_network()?;
    trace_command!(ctx.cli, ctx.start, "load_network");
    trips::execute(ctx.cli, &network, &args.from, &args.to, query)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_shortest(ctx: &CommandContext, from: &str, to: &str) -> Result<()> {
    let network = ctx.load_network()?;
    trace_command!(ctx.cli, ctx.start, "load_network");
    shortest::execute(ctx.cli, &network, from, to)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

fn execute_exam(ctx: &CommandContext) -> Result<()> {
    let network = ctx.load_network()?;
    trace_command!(ctx.cli, ctx.start, "load_network");
    exam::execute(ctx.cli, &network)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}
