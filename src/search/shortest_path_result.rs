use serde::{ser::SerializeStruct, Serialize, Serializer};

use super::path::Path;
use crate::graphs::{Distance, Junction, INFINITY};

/// Outcome of one single source search. It is produced as a whole by
/// [`Dijkstra::single_source`](super::dijkstra::Dijkstra::single_source) and
/// never modified afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathResult {
    source: Junction,
    distances: Vec<Distance>,
    predecessors: Vec<Option<Junction>>,
    visited: Vec<bool>,
}

impl ShortestPathResult {
    pub(crate) fn new(
        source: Junction,
        distances: Vec<Distance>,
        predecessors: Vec<Option<Junction>>,
        visited: Vec<bool>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        debug_assert_eq!(distances.len(), visited.len());
        ShortestPathResult {
            source,
            distances,
            predecessors,
            visited,
        }
    }

    pub fn source(&self) -> Junction {
        self.source
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32
    }

    /// Distances from the source, [`INFINITY`] for unreachable junctions.
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    pub fn predecessors(&self) -> &[Option<Junction>] {
        &self.predecessors
    }

    pub fn visited(&self) -> &[bool] {
        &self.visited
    }

    pub fn distance(&self, junction: Junction) -> Option<Distance> {
        let distance = *self.distances.get(junction as usize)?;
        if distance == INFINITY {
            return None;
        }
        Some(distance)
    }

    pub fn predecessor(&self, junction: Junction) -> Option<Junction> {
        *self.predecessors.get(junction as usize)?
    }

    pub fn is_visited(&self, junction: Junction) -> bool {
        self.visited.get(junction as usize).copied().unwrap_or(false)
    }

    pub fn is_reachable(&self, junction: Junction) -> bool {
        self.distance(junction).is_some()
    }

    /// Iterates the predecessor chain starting at `junction`, yielding each
    /// junction before moving to its predecessor. The walk ends after the
    /// source or after the first junction without a predecessor, and never
    /// takes more than `n` steps.
    pub fn chain(&self, junction: Junction) -> impl Iterator<Item = Junction> + '_ {
        let mut current = (self.distance(junction).is_some()).then_some(junction);
        let mut remaining = self.distances.len();
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            let junction = current?;
            current = if junction == self.source {
                None
            } else {
                self.predecessor(junction)
            };
            Some(junction)
        })
    }

    /// Reconstructs the shortest path from the source to `target`.
    ///
    /// Returns `None` if `target` is unreachable or out of range.
    pub fn path_to(&self, target: Junction) -> Option<Path> {
        let distance = self.distance(target)?;
        let mut vertices: Vec<Junction> = self.chain(target).collect();
        if vertices.last() != Some(&self.source) {
            return None;
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Serializes as `{source, dist, parent, visited}` with `null` for unreachable
/// distances and `-1` for a missing predecessor.
impl Serialize for ShortestPathResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let dist: Vec<Option<Distance>> = (0..self.number_of_vertices())
            .map(|junction| self.distance(junction))
            .collect();
        let parent: Vec<i64> = self
            .predecessors
            .iter()
            .map(|predecessor| predecessor.map_or(-1, i64::from))
            .collect();

        let mut state = serializer.serialize_struct("ShortestPathResult", 4)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("dist", &dist)?;
        state.serialize_field("parent", &parent)?;
        state.serialize_field("visited", &self.visited)?;
        state.end()
    }
}
