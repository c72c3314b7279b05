use super::shortest_path_result::ShortestPathResult;
use crate::graphs::{Distance, Graph, INFINITY};

/// Checks that `result` is a valid single source shortest path result for
/// `graph`. Returns a description of the first violation found.
pub fn validate_result(graph: &dyn Graph, result: &ShortestPathResult) -> Result<(), String> {
    let n = graph.number_of_vertices();
    let source = result.source();

    if result.number_of_vertices() != n {
        return Err(format!(
            "result covers {} junctions but graph has {}",
            result.number_of_vertices(),
            n
        ));
    }

    if result.distances()[source as usize] != 0 {
        return Err("source distance is not 0".to_string());
    }
    if result.predecessor(source).is_some() {
        return Err("source has a predecessor".to_string());
    }

    for junction in 0..n {
        let distance = result.distances()[junction as usize];

        if !result.is_visited(junction)
            && (distance != INFINITY || result.predecessor(junction).is_some())
        {
            return Err(format!("unvisited junction {} is not unreachable", junction));
        }

        // no road may offer a shorter way
        if distance != INFINITY {
            for road in graph.out_edges(junction) {
                if result.distances()[road.to as usize] > distance + Distance::from(road.cost) {
                    return Err(format!("road {} -> {} can still be relaxed", road.from, road.to));
                }
            }
        }

        // the predecessor chain must end in the source and match the distance
        if let Some(path) = result.path_to(junction) {
            let cost = path
                .vertices
                .windows(2)
                .map(|pair| graph.get_edge_weight(pair[0], pair[1]).map(Distance::from))
                .sum::<Option<Distance>>()
                .ok_or_else(|| format!("path to {} uses a missing road", junction))?;
            if cost != distance {
                return Err(format!(
                    "path to {} costs {} but distance is {}",
                    junction, cost, distance
                ));
            }
        } else if distance != INFINITY {
            return Err(format!(
                "predecessor chain of {} does not reach the source",
                junction
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_result;
    use crate::{
        graphs::{matrix_graph::MatrixGraph, road_list::sample_roads, INFINITY},
        search::{dijkstra::compute_shortest_paths, shortest_path_result::ShortestPathResult},
    };

    #[test]
    fn accepts_dijkstra_result() {
        let graph = MatrixGraph::from_roads(5, &sample_roads()).unwrap();
        for source in 0..5 {
            let result = compute_shortest_paths(&graph, source).unwrap();
            assert_eq!(validate_result(&graph, &result), Ok(()));
        }
    }

    #[test]
    fn rejects_relaxable_road() {
        let graph = MatrixGraph::from_roads(5, &sample_roads()).unwrap();
        let result = ShortestPathResult::new(
            0,
            vec![0, 4, 3, 9, 11],
            vec![None, Some(0), Some(1), Some(1), Some(3)],
            vec![true; 5],
        );
        assert!(validate_result(&graph, &result).is_err());
    }

    #[test]
    fn rejects_reachable_unvisited_junction() {
        let graph = MatrixGraph::new(2);
        let result = ShortestPathResult::new(0, vec![0, 5], vec![None, None], vec![true, false]);
        assert!(validate_result(&graph, &result).is_err());

        let result =
            ShortestPathResult::new(0, vec![0, INFINITY], vec![None, None], vec![true, false]);
        assert_eq!(validate_result(&graph, &result), Ok(()));
    }
}
