use serde::{Deserialize, Serialize};

use super::{Cost, Junction};

/// A directed, weighted road between two junctions. `from -> to` is
/// independent of `to -> from`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct Road {
    pub from: Junction,
    pub to: Junction,
    pub cost: Cost,
}

impl Road {
    /// Returns `None` for a zero cost, which would be indistinguishable from a
    /// missing road.
    pub fn new(from: Junction, to: Junction, cost: Cost) -> Option<Road> {
        if cost == 0 {
            return None;
        }

        Some(Road { from, to, cost })
    }

    pub fn fits(&self, number_of_junctions: u32) -> bool {
        self.from < number_of_junctions && self.to < number_of_junctions
    }
}
