use crate::{
    error::Result,
    graphs::{edge::Road, matrix_graph::MatrixGraph, road_list::sample_roads, Graph, Junction},
    report::Report,
    search::{
        dijkstra::Dijkstra, path_tree::is_edge_on_shortest_path_tree,
        shortest_path_result::ShortestPathResult, SelectionRule,
    },
};

/// A road network together with the most recent shortest path result.
///
/// The result is replaced as a whole by [`TrafficNetwork::find_shortest_paths`]
/// and dropped whenever the roads change, so it always belongs to the current
/// graph.
#[derive(Clone, Debug, Default)]
pub struct TrafficNetwork {
    graph: MatrixGraph,
    rule: SelectionRule,
    result: Option<ShortestPathResult>,
}

impl TrafficNetwork {
    pub fn new(number_of_junctions: u32) -> Self {
        TrafficNetwork {
            graph: MatrixGraph::new(number_of_junctions),
            ..Default::default()
        }
    }

    /// A network of `n` junctions with every demonstration road that fits.
    pub fn with_sample_roads(number_of_junctions: u32) -> Result<Self> {
        let fitting: Vec<Road> = sample_roads()
            .into_iter()
            .filter(|road| road.fits(number_of_junctions))
            .collect();
        Ok(TrafficNetwork {
            graph: MatrixGraph::from_roads(number_of_junctions, &fitting)?,
            ..Default::default()
        })
    }

    pub fn with_rule(mut self, rule: SelectionRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn graph(&self) -> &MatrixGraph {
        &self.graph
    }

    pub fn number_of_junctions(&self) -> u32 {
        self.graph.number_of_vertices()
    }

    pub fn set_road(&mut self, road: &Road) -> Result<()> {
        self.graph.set_road(road)?;
        self.result = None;
        Ok(())
    }

    /// Replaces all roads with `roads`. The previous roads are discarded even
    /// if one of the new roads is rejected.
    pub fn load_roads(&mut self, roads: &[Road]) -> Result<()> {
        self.result = None;
        self.graph.resize(self.number_of_junctions());
        for road in roads {
            self.graph.set_road(road)?;
        }
        Ok(())
    }

    /// Runs Dijkstra from `source` and caches the result, replacing the old
    /// one. On error the previous result is kept.
    pub fn find_shortest_paths(&mut self, source: Junction) -> Result<&ShortestPathResult> {
        let result = Dijkstra::new(&self.graph)
            .with_rule(self.rule)
            .single_source(source)?;
        Ok(&*self.result.insert(result))
    }

    pub fn result(&self) -> Option<&ShortestPathResult> {
        self.result.as_ref()
    }

    pub fn is_shortest_path_link(&self, from: Junction, to: Junction) -> bool {
        is_edge_on_shortest_path_tree(self.result(), from, to)
    }

    pub fn reset_result(&mut self) {
        self.result = None;
    }

    /// Starts over with `n` junctions and no roads.
    pub fn clear_all(&mut self, number_of_junctions: u32) {
        self.graph.resize(number_of_junctions);
        self.result = None;
    }

    pub fn report(&self) -> Report {
        Report::new(self.number_of_junctions(), self.result())
    }
}
