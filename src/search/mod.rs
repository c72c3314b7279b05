use clap::ValueEnum;
use path::Path;
use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Junction};

pub mod dijkstra;
pub mod path;
pub mod path_tree;
pub mod shortest_path_result;
pub mod validation;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: Junction, target: Junction) -> Option<Path>;

    fn shortest_path_distance(&self, source: Junction, target: Junction) -> Option<Distance> {
        self.shortest_path(source, target).map(|path| path.distance)
    }
}

/// Decides which junction is settled next when several unvisited junctions
/// share the minimum tentative distance. Distances are the same under both
/// rules; only the shape of the predecessor tree may differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum SelectionRule {
    /// The lowest index among the tied junctions wins.
    #[default]
    #[value(name = "first")]
    FirstMinimum,
    /// The highest index among the tied junctions wins, reproducing a scan
    /// that compares with `<=` against the running minimum.
    #[value(name = "last")]
    LastMinimum,
}
