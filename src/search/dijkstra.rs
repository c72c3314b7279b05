use super::{path::Path, shortest_path_result::ShortestPathResult, PathFinding, SelectionRule};
use crate::{
    error::{Error, Result},
    graphs::{Distance, Graph, Junction, INFINITY},
};

/// Dijkstra's algorithm with a linear minimum scan instead of a priority
/// queue. Every search is `O(n^2)`, which is plenty for interactive networks
/// of a few dozen junctions.
#[derive(Clone)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
    rule: SelectionRule,
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, source: Junction, target: Junction) -> Option<Path> {
        self.single_source(source).ok()?.path_to(target)
    }
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Self {
        Dijkstra {
            graph,
            rule: SelectionRule::default(),
        }
    }

    pub fn with_rule(mut self, rule: SelectionRule) -> Self {
        self.rule = rule;
        self
    }

    /// Computes distances and predecessors from `source` to every junction.
    ///
    /// Fails with [`Error::InvalidSource`] if `source` is not a junction of the
    /// graph. Edge costs are assumed to be non-negative.
    pub fn single_source(&self, source: Junction) -> Result<ShortestPathResult> {
        let number_of_vertices = self.graph.number_of_vertices();
        if source >= number_of_vertices {
            return Err(Error::InvalidSource {
                junction: source,
                junctions: number_of_vertices,
            });
        }

        let n = number_of_vertices as usize;
        let mut distances = vec![INFINITY; n];
        let mut predecessors = vec![None; n];
        let mut visited = vec![false; n];
        distances[source as usize] = 0;

        for _ in 0..n {
            let Some(tail) = self.select(&distances, &visited) else {
                break;
            };
            visited[tail as usize] = true;
            tracing::trace!(junction = tail, distance = distances[tail as usize], "settled");

            let distance_tail = distances[tail as usize];
            for road in self.graph.out_edges(tail) {
                let head = road.to as usize;
                if visited[head] {
                    continue;
                }
                let alternative_distance_head = distance_tail + Distance::from(road.cost);
                if alternative_distance_head < distances[head] {
                    distances[head] = alternative_distance_head;
                    predecessors[head] = Some(tail);
                }
            }
        }

        tracing::debug!(
            source,
            junctions = number_of_vertices,
            settled = visited.iter().filter(|&&settled| settled).count(),
            "computed shortest paths"
        );

        Ok(ShortestPathResult::new(
            source,
            distances,
            predecessors,
            visited,
        ))
    }

    /// Unvisited junction with the smallest finite distance, ties broken by
    /// `self.rule`. `None` once every remaining junction is unreachable.
    fn select(&self, distances: &[Distance], visited: &[bool]) -> Option<Junction> {
        let candidates = (0..distances.len())
            .filter(|&junction| !visited[junction] && distances[junction] != INFINITY);

        let selected = match self.rule {
            SelectionRule::FirstMinimum => candidates.min_by_key(|&junction| distances[junction]),
            SelectionRule::LastMinimum => candidates
                .rev()
                .min_by_key(|&junction| distances[junction]),
        };

        selected.map(|junction| junction as Junction)
    }
}

/// Runs a single source search with the default selection rule.
pub fn compute_shortest_paths(graph: &dyn Graph, source: Junction) -> Result<ShortestPathResult> {
    Dijkstra::new(graph).single_source(source)
}
