use super::{edge::Road, Cost, Graph, Junction};
use crate::error::{Error, Result};

/// Directed adjacency matrix stored row-major in a single vector, so the cost
/// of `tail -> head` lives at `tail * n + head`. A cost of zero means there is
/// no road.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixGraph {
    number_of_junctions: u32,
    costs: Vec<Cost>,
}

impl Default for MatrixGraph {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Graph for MatrixGraph {
    fn number_of_vertices(&self) -> u32 {
        self.number_of_junctions
    }

    fn number_of_edges(&self) -> u32 {
        self.costs.iter().filter(|&&cost| cost > 0).count() as u32
    }

    fn get_edge_weight(&self, tail: Junction, head: Junction) -> Option<Cost> {
        let cost = *self.costs.get(self.index(tail, head)?)?;
        if cost == 0 {
            return None;
        }
        Some(cost)
    }

    fn out_edges(&self, tail: Junction) -> Box<dyn ExactSizeIterator<Item = Road> + Send + '_> {
        // Walks one row of the matrix and yields only the non-zero entries.
        struct OutEdgeIterator<'a> {
            tail: Junction,
            current_head: Junction,
            row: &'a [Cost],
        }

        impl<'a> Iterator for OutEdgeIterator<'a> {
            type Item = Road;

            fn next(&mut self) -> Option<Self::Item> {
                while (self.current_head as usize) < self.row.len() {
                    let head = self.current_head;
                    self.current_head += 1;

                    if let Some(road) = Road::new(self.tail, head, self.row[head as usize]) {
                        return Some(road);
                    }
                }
                None
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let remaining = self.len();
                (remaining, Some(remaining))
            }
        }

        impl<'a> ExactSizeIterator for OutEdgeIterator<'a> {
            fn len(&self) -> usize {
                self.row[self.current_head as usize..]
                    .iter()
                    .filter(|&&cost| cost > 0)
                    .count()
            }
        }

        let row: &[Cost] = if tail < self.number_of_junctions {
            let start = tail as usize * self.number_of_junctions as usize;
            &self.costs[start..start + self.number_of_junctions as usize]
        } else {
            &[]
        };

        Box::new(OutEdgeIterator {
            tail,
            current_head: 0,
            row,
        })
    }
}

impl MatrixGraph {
    pub fn new(number_of_junctions: u32) -> Self {
        let n = number_of_junctions as usize;
        MatrixGraph {
            number_of_junctions,
            costs: vec![0; n * n],
        }
    }

    /// Builds an `n x n` matrix from `roads`. Later roads for the same ordered
    /// pair overwrite earlier ones.
    pub fn from_roads(number_of_junctions: u32, roads: &[Road]) -> Result<MatrixGraph> {
        let mut graph = MatrixGraph::new(number_of_junctions);
        for road in roads {
            graph.set_edge(road.from, road.to, road.cost)?;
        }
        Ok(graph)
    }

    /// Discards every road and reinitializes the matrix with `n` junctions.
    pub fn resize(&mut self, number_of_junctions: u32) {
        *self = MatrixGraph::new(number_of_junctions);
    }

    /// Sets the cost of `from -> to`, replacing any previous cost of that
    /// ordered pair.
    pub fn set_edge(&mut self, from: Junction, to: Junction, cost: Cost) -> Result<()> {
        if cost == 0 {
            return Err(Error::ZeroCost { from, to });
        }
        let index = self.index(from, to).ok_or_else(|| Error::InvalidJunction {
            junction: std::cmp::max(from, to),
            junctions: self.number_of_junctions,
        })?;
        self.costs[index] = cost;
        Ok(())
    }

    pub fn set_road(&mut self, road: &Road) -> Result<()> {
        self.set_edge(road.from, road.to, road.cost)
    }

    /// Cost of `from -> to`, or 0 if there is no such road.
    pub fn get_edge(&self, from: Junction, to: Junction) -> Cost {
        self.get_edge_weight(from, to).unwrap_or(0)
    }

    /// All roads in row-major order.
    pub fn roads(&self) -> Vec<Road> {
        super::all_edges(self)
    }

    fn index(&self, tail: Junction, head: Junction) -> Option<usize> {
        if tail >= self.number_of_junctions || head >= self.number_of_junctions {
            return None;
        }
        Some(tail as usize * self.number_of_junctions as usize + head as usize)
    }
}
