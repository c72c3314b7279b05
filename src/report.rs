use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    graphs::{Distance, Junction},
    search::shortest_path_result::ShortestPathResult,
};

/// Cost to reach a junction, as shown in the result listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "distance", rename_all = "snake_case")]
pub enum JunctionStatus {
    Source,
    Reachable(Distance),
    Unreachable,
}

/// Highlighting class of a junction. The source wins over visited, every
/// other junction of a result is unreachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeClass {
    Source,
    Visited,
    Unreachable,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JunctionReport {
    pub junction: Junction,
    pub status: JunctionStatus,
    pub class: NodeClass,
}

impl fmt::Display for JunctionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            JunctionStatus::Source => write!(f, "Junction {}: Source (Cost: 0)", self.junction),
            JunctionStatus::Reachable(distance) => {
                write!(f, "Junction {}: {}", self.junction, distance)
            }
            JunctionStatus::Unreachable => write!(f, "Junction {}: Not reachable", self.junction),
        }
    }
}

/// Per junction summary of one shortest path result. Empty if there is no
/// result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub source: Option<Junction>,
    pub junctions: Vec<JunctionReport>,
}

impl Report {
    pub fn new(number_of_junctions: u32, result: Option<&ShortestPathResult>) -> Report {
        let Some(result) = result else {
            return Report::default();
        };

        let junctions = (0..number_of_junctions.min(result.number_of_vertices()))
            .map(|junction| {
                let (status, class) = if junction == result.source() {
                    (JunctionStatus::Source, NodeClass::Source)
                } else {
                    let status = match result.distance(junction) {
                        Some(distance) => JunctionStatus::Reachable(distance),
                        None => JunctionStatus::Unreachable,
                    };
                    let class = if result.is_visited(junction) {
                        NodeClass::Visited
                    } else {
                        NodeClass::Unreachable
                    };
                    (status, class)
                };
                JunctionReport {
                    junction,
                    status,
                    class,
                }
            })
            .collect();

        Report {
            source: Some(result.source()),
            junctions,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.junctions.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::{JunctionStatus, NodeClass, Report};
    use crate::{graphs::matrix_graph::MatrixGraph, search::dijkstra::compute_shortest_paths};

    #[test]
    fn empty_without_result() {
        let report = Report::new(4, None);
        assert!(report.junctions.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn lists_every_junction() {
        let mut graph = MatrixGraph::new(3);
        graph.set_edge(1, 0, 2).unwrap();
        graph.set_edge(1, 2, 7).unwrap();
        let result = compute_shortest_paths(&graph, 1).unwrap();
        let report = Report::new(3, Some(&result));

        assert_eq!(report.source, Some(1));
        assert_eq!(report.junctions[0].status, JunctionStatus::Reachable(2));
        assert_eq!(report.junctions[1].class, NodeClass::Source);
        assert_eq!(
            report.to_string(),
            "Junction 0: 2\nJunction 1: Source (Cost: 0)\nJunction 2: 7"
        );
    }

    #[test]
    fn classes_follow_visited_flags() {
        let mut graph = MatrixGraph::new(4);
        graph.set_edge(0, 1, 3).unwrap();
        graph.set_edge(1, 2, 1).unwrap();
        let result = compute_shortest_paths(&graph, 0).unwrap();
        let classes: Vec<_> = Report::new(4, Some(&result))
            .junctions
            .iter()
            .map(|junction| junction.class)
            .collect();

        assert_eq!(
            classes,
            vec![
                NodeClass::Source,
                NodeClass::Visited,
                NodeClass::Visited,
                NodeClass::Unreachable
            ]
        );
    }

    #[test]
    fn unreachable_junctions() {
        let graph = MatrixGraph::new(2);
        let result = compute_shortest_paths(&graph, 0).unwrap();
        let report = Report::new(2, Some(&result));

        assert_eq!(report.junctions[1].status, JunctionStatus::Unreachable);
        assert_eq!(report.junctions[1].class, NodeClass::Unreachable);
        assert_eq!(report.junctions[1].to_string(), "Junction 1: Not reachable");
    }
}
