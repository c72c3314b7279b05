use rand::{rngs::StdRng, Rng, SeedableRng};
use traffic_paths::{
    graphs::Graph,
    search::{path_tree::tree_roads, validation::validate_result},
    utility::random_roads,
    Dijkstra, MatrixGraph, SelectionRule, INFINITY,
};

fn random_graphs() -> impl Iterator<Item = MatrixGraph> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..200).map(move |_| {
        let number_of_junctions = rng.gen_range(1..=12);
        let density = rng.gen_range(0.0..0.6);
        let roads = random_roads(&mut rng, number_of_junctions, density, 10);
        MatrixGraph::from_roads(number_of_junctions, &roads).unwrap()
    })
}

#[test]
fn results_are_valid() {
    for graph in random_graphs() {
        for source in 0..graph.number_of_vertices() {
            for rule in [SelectionRule::FirstMinimum, SelectionRule::LastMinimum] {
                let result = Dijkstra::new(&graph).with_rule(rule).single_source(source).unwrap();
                assert_eq!(validate_result(&graph, &result), Ok(()));

                for junction in 0..graph.number_of_vertices() {
                    if !result.is_visited(junction) {
                        assert_eq!(result.distances()[junction as usize], INFINITY);
                        assert_eq!(result.predecessor(junction), None);
                    }
                }
            }
        }
    }
}

#[test]
fn chains_reach_source() {
    for graph in random_graphs() {
        let n = graph.number_of_vertices();
        let result = Dijkstra::new(&graph).single_source(0).unwrap();

        for junction in (0..n).filter(|&junction| result.is_reachable(junction)) {
            let chain: Vec<_> = result.chain(junction).collect();
            assert!(chain.len() <= n as usize);
            assert_eq!(chain.last(), Some(&0));

            let mut seen = chain.clone();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), chain.len());
        }
    }
}

#[test]
fn rules_agree_on_distances() {
    for graph in random_graphs() {
        for source in 0..graph.number_of_vertices() {
            let first = Dijkstra::new(&graph)
                .with_rule(SelectionRule::FirstMinimum)
                .single_source(source)
                .unwrap();
            let last = Dijkstra::new(&graph)
                .with_rule(SelectionRule::LastMinimum)
                .single_source(source)
                .unwrap();
            assert_eq!(first.distances(), last.distances());
            assert_eq!(first.visited(), last.visited());
        }
    }
}

#[test]
fn idempotent() {
    for graph in random_graphs() {
        let dijkstra = Dijkstra::new(&graph).with_rule(SelectionRule::LastMinimum);
        assert_eq!(dijkstra.single_source(0).unwrap(), dijkstra.single_source(0).unwrap());
    }
}

#[test]
fn tree_has_one_road_per_reached_junction() {
    for graph in random_graphs() {
        let result = Dijkstra::new(&graph).single_source(0).unwrap();
        let reached = (0..graph.number_of_vertices())
            .filter(|&junction| result.is_reachable(junction))
            .count();

        let tree = tree_roads(&graph, Some(&result));
        assert_eq!(tree.len(), reached - 1);
        assert!(tree
            .iter()
            .all(|road| result.predecessor(road.to) == Some(road.from)));
    }
}
