use std::fmt;

use tracing::{debug, instrument};

use crate::errors::{GraphError, GraphResult};
use crate::graph::TreeGraph;

/// Diameter of a tree: the two endpoints of a longest simple path and its
/// length in edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diameter {
    pub from: usize,
    pub to: usize,
    pub length: usize,
}

impl fmt::Display for Diameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Longest path is from {} to {} of length {}",
            self.from, self.to, self.length
        )
    }
}

impl TreeGraph {
    /// Diameter via the two-BFS technique: BFS from vertex 0 finds one
    /// endpoint of a longest path, BFS from that endpoint finds the other
    /// endpoint and the length. Correct for connected acyclic graphs.
    ///
    /// A single-vertex tree yields `Diameter { from: 0, to: 0, length: 0 }`.
    #[instrument(level = "debug", skip(self))]
    pub fn longest_path(&self) -> GraphResult<Diameter> {
        if self.vertex_count() == 0 {
            return Err(GraphError::EmptyGraph);
        }
        let endpoint = self.farthest_from(0)?;
        let opposite = self.farthest_from(endpoint.vertex)?;
        debug!("diameter endpoints: {} -> {}", endpoint.vertex, opposite.vertex);
        Ok(Diameter {
            from: endpoint.vertex,
            to: opposite.vertex,
            length: opposite.distance,
        })
    }

    /// The vertex sequence of a longest path, from one diameter endpoint to
    /// the other (`length + 1` vertices). Reconstructed by following the
    /// parent links of the second BFS pass back from the far endpoint.
    #[instrument(level = "debug", skip(self))]
    pub fn diameter_path(&self) -> GraphResult<Vec<usize>> {
        if self.vertex_count() == 0 {
            return Err(GraphError::EmptyGraph);
        }
        let from = self.farthest_from(0)?.vertex;
        let tree = self.bfs(from)?;
        let to = tree.farthest(from).vertex;

        let mut path = vec![to];
        let mut current = to;
        while let Some(parent) = tree.parent[current] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Ok(path)
    }

    /// The vertex minimizing its maximum distance to any other vertex,
    /// found as the midpoint of a diameter path: offset `length / 2` from
    /// the `from` endpoint. Even-length diameters have a unique center;
    /// odd-length ones have two adjacent candidates and this returns the
    /// one nearer `from`.
    #[instrument(level = "debug", skip(self))]
    pub fn center(&self) -> GraphResult<usize> {
        let path = self.diameter_path()?;
        Ok(path[(path.len() - 1) / 2])
    }
}
