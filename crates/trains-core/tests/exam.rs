//! End-to-end checks over the standard sample network

use trains_core::error::TrainsError;
use trains_core::network::exam::run_exam;
use trains_core::network::Network;

const SAMPLE: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

fn sample() -> Network {
    Network::from_route_list(SAMPLE).unwrap()
}

#[test]
fn test_route_distances() {
    let network = sample();
    assert_eq!(network.route_distance(&["A", "B", "C"]).unwrap(), 9);
    assert_eq!(network.route_distance(&["A", "D"]).unwrap(), 5);
    assert_eq!(network.route_distance(&["A", "D", "C"]).unwrap(), 13);
    assert_eq!(
        network
            .route_distance(&["A", "E", "B", "C", "D"])
            .unwrap(),
        22
    );
    assert!(matches!(
        network.route_distance(&["A", "E", "D"]),
        Err(TrainsError::NoSuchRoute { .. })
    ));
}

#[test]
fn test_trip_queries() {
    let network = sample();

    assert_eq!(
        network.find_trips_max_steps("C", "C", 3).canonical(),
        vec!["CDC", "CEBC"]
    );
    assert_eq!(
        network.find_trips_equal_steps("A", "C", 4).canonical(),
        vec!["ABCDC", "ADCDC", "ADEBC"]
    );
    assert_eq!(
        network.shortest_distance_trip("A", "C").unwrap().distance(),
        9
    );
    assert_eq!(
        network.shortest_distance_trip("B", "B").unwrap().distance(),
        9
    );
    assert_eq!(
        network.find_trips_max_distance("C", "C", 30).canonical(),
        vec![
            "CDC",
            "CDCEBC",
            "CDEBC",
            "CEBC",
            "CEBCDC",
            "CEBCEBC",
            "CEBCEBCEBC"
        ]
    );
}

#[test]
fn test_zero_stop_boundary() {
    let network = sample();
    assert_eq!(
        network.find_trips_equal_steps("C", "C", 0).canonical(),
        vec!["C"]
    );
    assert!(network.find_trips_equal_steps("C", "D", 0).is_empty());
}

#[test]
fn test_overwrite_keeps_latest_distance() {
    let mut network = Network::new();
    network.add_route("A", "B", 5);
    network.add_route("A", "B", 7);
    assert_eq!(network.distance("A", "B").unwrap(), 7);
}

#[test]
fn test_exam_report() {
    let lines: Vec<String> = run_exam(&sample())
        .unwrap()
        .iter()
        .map(|answer| answer.to_string())
        .collect();

    assert_eq!(
        lines,
        vec![
            "Output #1: 9",
            "Output #2: 5",
            "Output #3: 13",
            "Output #4: 22",
            "Output #5: NO SUCH ROUTE",
            "Output #6: 2",
            "Output #7: 3",
            "Output #8: 9",
            "Output #9: 9",
            "Output #10: 7",
        ]
    );
}

#[test]
fn test_every_result_is_sorted_and_consistent() {
    let network = sample();
    let cities = network.graph().cities();

    for from in &cities {
        for to in &cities {
            for trips in [
                network.find_trips(from, to),
                network.find_trips_equal_steps(from, to, 3),
                network.find_trips_max_distance(from, to, 25),
            ] {
                let all: Vec<_> = trips.iter().collect();
                for pair in all.windows(2) {
                    assert!(pair[0].cities() < pair[1].cities());
                }
                for trip in &trips {
                    assert_eq!(trip.start(), *from);
                    assert_eq!(trip.position(), *to);
                    assert_eq!(
                        network.route_distance(&trip.cities()).unwrap(),
                        trip.distance()
                    );
                }
            }
        }
    }
}
