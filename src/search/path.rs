use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Junction};

/// Represents a path in a graph.
///
/// This struct encapsulates the junctions that form a path from the source to
/// the target, both included, and the total cost of traversing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Junction>,
    pub distance: Distance,
}
