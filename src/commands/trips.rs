//! `trains trips` - enumerate trips between two cities

use tracing::debug;

use crate::cli::{Cli, TripsArgs};
use trains_core::bail_usage;
use trains_core::error::Result;
use trains_core::explorer::TripSet;
use trains_core::format::render_trips;
use trains_core::network::Network;

/// Which trip query to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripQuery {
    /// No city repeats inside a trip
    Simple,
    MaxStops(usize),
    ExactStops(usize),
    MaxDistance(u32),
}

/// Pick the query from the flags; at most one constraint may be given
pub fn query_from_args(args: &TripsArgs) -> Result<TripQuery> {
    let query = match (args.max_stops, args.exact_stops, args.max_distance) {
        (None, None, None) => TripQuery::Simple,
        (Some(n), None, None) => TripQuery::MaxStops(n),
        (None, Some(n), None) => TripQuery::ExactStops(n),
        (None, None, Some(d)) => TripQuery::MaxDistance(d),
        _ => bail_usage!("--max-stops, --exact-stops and --max-distance are mutually exclusive"),
    };
    Ok(query)
}

/// Run the query against the network
pub fn find(network: &Network, from: &str, to: &str, query: TripQuery) -> TripSet {
    match query {
        TripQuery::Simple => network.find_trips(from, to),
        TripQuery::MaxStops(n) => network.find_trips_max_steps(from, to, n),
        TripQuery::ExactStops(n) => network.find_trips_equal_steps(from, to, n),
        TripQuery::MaxDistance(d) => network.find_trips_max_distance(from, to, d),
    }
}

/// Execute the trips command
pub fn execute(
    cli: &Cli,
    network: &Network,
    from: &str,
    to: &str,
    query: TripQuery,
) -> Result<()> {
    let trips = find(network, from, to, query);
    debug!(?query, count = trips.len(), truncated = trips.truncated(), "trips");

    println!("{}", render_trips(cli.format, "trips", from, to, &trips)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(
        max_stops: Option<usize>,
        exact_stops: Option<usize>,
        max_distance: Option<u32>,
    ) -> TripsArgs {
        TripsArgs {
            from: "C".to_string(),
            to: "C".to_string(),
            max_stops,
            exact_stops,
            max_distance,
        }
    }

    fn sample() -> Network {
        Network::from_route_list("AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7").unwrap()
    }

    #[test]
    fn test_query_from_args() {
        assert_eq!(
            query_from_args(&args(None, None, None)).unwrap(),
            TripQuery::Simple
        );
        assert_eq!(
            query_from_args(&args(Some(3), None, None)).unwrap(),
            TripQuery::MaxStops(3)
        );
        assert_eq!(
            query_from_args(&args(None, None, Some(30))).unwrap(),
            TripQuery::MaxDistance(30)
        );
    }

    #[test]
    fn test_conflicting_constraints_are_usage_errors() {
        let err = query_from_args(&args(Some(3), Some(4), None)).unwrap_err();
        assert_eq!(err.exit_code(), trains_core::error::ExitCode::Usage);
    }

    #[test]
    fn test_find_dispatches_each_query() {
        let network = sample();
        assert_eq!(
            find(&network, "C", "C", TripQuery::MaxStops(3)).canonical(),
            vec!["CDC", "CEBC"]
        );
        assert_eq!(
            find(&network, "A", "C", TripQuery::ExactStops(4)).canonical(),
            vec!["ABCDC", "ADCDC", "ADEBC"]
        );
        assert_eq!(find(&network, "C", "C", TripQuery::MaxDistance(30)).len(), 7);
        assert!(find(&network, "B", "B", TripQuery::Simple)
            .canonical()
            .contains(&"BCEB".to_string()));
    }
}
