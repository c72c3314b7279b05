use super::shortest_path_result::ShortestPathResult;
use crate::graphs::{all_edges, edge::Road, Graph, Junction};

/// Checks whether the road `from -> to` is used by the shortest path tree of
/// `result`, i.e. whether the predecessor chain of some reachable junction
/// steps from `to` back to `from`.
///
/// Without a result nothing is on the tree. Every chain walk is bounded by
/// the number of junctions, so a query costs at most `O(n^2)`.
pub fn is_edge_on_shortest_path_tree(
    result: Option<&ShortestPathResult>,
    from: Junction,
    to: Junction,
) -> bool {
    let Some(result) = result else {
        return false;
    };

    (0..result.number_of_vertices())
        .filter(|&junction| result.is_reachable(junction))
        .any(|junction| {
            result.chain(junction).any(|current| {
                current == to
                    && current != result.source()
                    && result.predecessor(current) == Some(from)
            })
        })
}

/// All roads of `graph` that lie on the shortest path tree, in row-major order.
pub fn tree_roads(graph: &dyn Graph, result: Option<&ShortestPathResult>) -> Vec<Road> {
    all_edges(graph)
        .into_iter()
        .filter(|road| is_edge_on_shortest_path_tree(result, road.from, road.to))
        .collect()
}
