use edge::Road;

pub mod edge;
pub mod matrix_graph;
pub mod road_list;

/// A junction of the road network, addressed by its index in `0..n`.
pub type Junction = u32;

/// The traversal cost of a single road. Zero is reserved for "no road".
pub type Cost = u32;

/// Accumulated cost of a path.
pub type Distance = u64;

/// Distance of every junction that is not (yet) reachable from the source.
pub const INFINITY: Distance = Distance::MAX;

pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.out_edges(vertex).len() as u32)
            .sum::<u32>()
    }

    /// Returns the cost of the road `tail -> head`, or `None` if there is no
    /// such road or one of the junctions is out of range.
    fn get_edge_weight(&self, tail: Junction, head: Junction) -> Option<Cost>;

    fn out_edges(&self, tail: Junction) -> Box<dyn ExactSizeIterator<Item = Road> + Send + '_>;
}

pub fn all_edges(graph: &dyn Graph) -> Vec<Road> {
    (0..graph.number_of_vertices())
        .flat_map(|vertex| graph.out_edges(vertex))
        .collect()
}
