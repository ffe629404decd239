use std::collections::VecDeque;

use tracing::{debug, instrument};

use crate::errors::GraphResult;
use crate::graph::TreeGraph;

/// Result of a farthest-vertex scan: the vertex with the greatest BFS
/// distance from the source and that distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Farthest {
    pub vertex: usize,
    pub distance: usize,
}

/// Shortest-path tree produced by one BFS pass.
///
/// `distance[v]` is None for vertices the traversal never reached,
/// `parent[v]` is the predecessor of v on the path back to the source
/// (None for the source itself and for unreached vertices).
pub(crate) struct BfsTree {
    pub distance: Vec<Option<usize>>,
    pub parent: Vec<Option<usize>>,
}

impl BfsTree {
    /// Scans all vertices in increasing index order for the strictly
    /// greatest distance. Ties go to the lowest-indexed vertex because the
    /// scan only updates on strict `>`. If no vertex has a positive
    /// distance (single-vertex tree, isolated source) the source itself is
    /// returned with distance 0.
    pub(crate) fn farthest(&self, source: usize) -> Farthest {
        let mut result = Farthest {
            vertex: source,
            distance: 0,
        };
        for (vertex, distance) in self.distance.iter().enumerate() {
            if let Some(distance) = *distance {
                if distance > result.distance {
                    result = Farthest { vertex, distance };
                }
            }
        }
        result
    }
}

impl TreeGraph {
    /// Single-source BFS with a FIFO frontier. Each vertex and edge is
    /// visited once, O(V + E).
    #[instrument(level = "debug", skip(self))]
    pub(crate) fn bfs(&self, source: usize) -> GraphResult<BfsTree> {
        self.check_vertex(source)?;

        let mut distance: Vec<Option<usize>> = vec![None; self.vertex_count()];
        let mut parent: Vec<Option<usize>> = vec![None; self.vertex_count()];
        let mut queue = VecDeque::new();

        distance[source] = Some(0);
        queue.push_back(source);

        while let Some(front) = queue.pop_front() {
            let front_distance = distance[front].unwrap_or(0);
            for &neighbor in self.neighbors(front)? {
                if distance[neighbor].is_none() {
                    distance[neighbor] = Some(front_distance + 1);
                    parent[neighbor] = Some(front);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(BfsTree { distance, parent })
    }

    /// Per-vertex BFS distances from `source`. None marks a vertex the
    /// traversal never reached; in a connected tree there are none.
    #[instrument(level = "debug", skip(self))]
    pub fn distances(&self, source: usize) -> GraphResult<Vec<Option<usize>>> {
        Ok(self.bfs(source)?.distance)
    }

    /// Farthest vertex from `source` and its distance.
    ///
    /// Tie-break: the lowest-indexed vertex achieving the maximum distance.
    /// Degenerate case (no vertex with positive distance): `(source, 0)`.
    #[instrument(level = "debug", skip(self))]
    pub fn farthest_from(&self, source: usize) -> GraphResult<Farthest> {
        let farthest = self.bfs(source)?.farthest(source);
        debug!(
            "farthest from {}: vertex {} at distance {}",
            source, farthest.vertex, farthest.distance
        );
        Ok(farthest)
    }
}
