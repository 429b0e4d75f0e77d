//! The ten standard questions asked of a route network
//!
//! Answers are rendered as `Output #<n>: <value>`, with a missing route shown
//! as `NO SUCH ROUTE`.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::network::Network;

pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamAnswer {
    pub number: u8,
    pub question: &'static str,
    /// None when the route does not exist
    pub value: Option<u32>,
}

impl fmt::Display for ExamAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "Output #{}: {}", self.number, value),
            None => write!(f, "Output #{}: {}", self.number, NO_SUCH_ROUTE),
        }
    }
}

/// Turn a missing route into `None`; any other failure is propagated
fn or_no_route(result: Result<u32>) -> Result<Option<u32>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_no_such_route() => Ok(None),
        Err(e) => Err(e),
    }
}

fn count(len: usize) -> Option<u32> {
    Some(u32::try_from(len).unwrap_or(u32::MAX))
}

/// Answer every question against `network`
#[tracing::instrument(skip(network))]
pub fn run_exam(network: &Network) -> Result<Vec<ExamAnswer>> {
    let routes: [(&'static str, &[&str]); 5] = [
        ("distance of the route A-B-C", &["A", "B", "C"]),
        ("distance of the route A-D", &["A", "D"]),
        ("distance of the route A-D-C", &["A", "D", "C"]),
        ("distance of the route A-E-B-C-D", &["A", "E", "B", "C", "D"]),
        ("distance of the route A-E-D", &["A", "E", "D"]),
    ];

    let mut answers = Vec::with_capacity(10);
    for (question, cities) in routes {
        answers.push(ExamAnswer {
            number: answers.len() as u8 + 1,
            question,
            value: or_no_route(network.route_distance(cities))?,
        });
    }

    answers.push(ExamAnswer {
        number: 6,
        question: "trips from C to C with at most 3 stops",
        value: count(network.find_trips_max_steps("C", "C", 3).len()),
    });
    answers.push(ExamAnswer {
        number: 7,
        question: "trips from A to C with exactly 4 stops",
        value: count(network.find_trips_equal_steps("A", "C", 4).len()),
    });
    answers.push(ExamAnswer {
        number: 8,
        question: "shortest route from A to C",
        value: or_no_route(
            network
                .shortest_distance_trip("A", "C")
                .map(|trip| trip.distance()),
        )?,
    });
    answers.push(ExamAnswer {
        number: 9,
        question: "shortest route from B to B",
        value: or_no_route(
            network
                .shortest_distance_trip("B", "B")
                .map(|trip| trip.distance()),
        )?,
    });
    answers.push(ExamAnswer {
        number: 10,
        question: "trips from C to C with a distance of less than 30",
        value: count(network.find_trips_max_distance("C", "C", 30).len()),
    });

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_display() {
        let found = ExamAnswer {
            number: 1,
            question: "q",
            value: Some(9),
        };
        let missing = ExamAnswer {
            number: 5,
            question: "q",
            value: None,
        };
        assert_eq!(found.to_string(), "Output #1: 9");
        assert_eq!(missing.to_string(), "Output #5: NO SUCH ROUTE");
    }

    #[test]
    fn test_exam_on_empty_network() {
        let answers = run_exam(&Network::new()).unwrap();
        assert_eq!(answers.len(), 10);
        assert!(answers[..5].iter().all(|a| a.value.is_none()));
        assert_eq!(answers[5].value, Some(0));
        assert_eq!(answers[7].value, None);
    }
}
