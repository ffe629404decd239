use tracing::instrument;

use crate::errors::{GraphError, GraphResult};

/// Undirected adjacency-list graph restricted to trees.
///
/// The diameter algorithms assume the graph is connected and acyclic;
/// this is a correctness precondition and is not verified. The graph is
/// built once via [`TreeGraph::add_edge`] and queried immutably afterwards.
#[derive(Debug, Clone)]
pub struct TreeGraph {
    /// Neighbor lists indexed by vertex, in insertion order
    adjacency: Vec<Vec<usize>>,
}

impl TreeGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (each edge is stored in both lists).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Inserts the undirected edge (u, v): v is appended to u's neighbor
    /// list and u to v's. Both endpoints are validated before either list
    /// is touched, so a rejected edge leaves the graph unchanged.
    ///
    /// Self-loops and duplicate edges are not rejected; callers are
    /// responsible for supplying valid tree edges.
    #[instrument(level = "trace", skip(self))]
    pub fn add_edge(&mut self, u: usize, v: usize) -> GraphResult<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        Ok(())
    }

    /// Neighbors of `v` in insertion order.
    pub fn neighbors(&self, v: usize) -> GraphResult<&[usize]> {
        self.check_vertex(v)?;
        Ok(&self.adjacency[v])
    }

    pub(crate) fn check_vertex(&self, v: usize) -> GraphResult<()> {
        if v >= self.vertex_count() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_graph_when_counting_then_has_no_edges() {
        let graph = TreeGraph::new(4);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn given_edge_when_inserted_then_appears_in_both_neighbor_lists() {
        let mut graph = TreeGraph::new(3);
        graph.add_edge(0, 2).unwrap();
        assert_eq!(graph.neighbors(0).unwrap(), &[2]);
        assert_eq!(graph.neighbors(2).unwrap(), &[0]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn given_out_of_range_endpoint_when_inserting_then_graph_is_unchanged() {
        let mut graph = TreeGraph::new(2);
        let result = graph.add_edge(0, 2);
        assert!(matches!(
            result,
            Err(GraphError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        ));
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.neighbors(0).unwrap().is_empty());
    }
}
