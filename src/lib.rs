//! Single source shortest paths over small directed road networks.
//!
//! A [`MatrixGraph`] holds the roads, [`Dijkstra`] computes a
//! [`ShortestPathResult`] from one source junction and
//! [`is_edge_on_shortest_path_tree`] tells which roads that result uses.
//! [`TrafficNetwork`] bundles a graph with its most recent result.

pub mod error;
pub mod graphs;
pub mod logging;
pub mod network;
pub mod report;
pub mod search;
pub mod utility;

pub use error::{Error, Result};
pub use graphs::{edge::Road, matrix_graph::MatrixGraph, Cost, Distance, Junction, INFINITY};
pub use network::TrafficNetwork;
pub use search::{
    dijkstra::{compute_shortest_paths, Dijkstra},
    path_tree::is_edge_on_shortest_path_tree,
    shortest_path_result::ShortestPathResult,
    SelectionRule,
};
