use termtree::Tree;
use tracing::instrument;

use crate::errors::GraphResult;
use crate::graph::TreeGraph;

impl TreeGraph {
    /// Renders the tree as an ASCII hierarchy rooted at `root`.
    ///
    /// The adjacency is undirected, so the recursion tracks the vertex it
    /// came from to avoid walking back up the edge it just descended.
    #[instrument(level = "debug", skip(self))]
    pub fn to_tree_string(&self, root: usize) -> GraphResult<Tree<String>> {
        self.check_vertex(root)?;

        fn build_tree(graph: &TreeGraph, vertex: usize, from: Option<usize>) -> Tree<String> {
            let mut tree = Tree::new(vertex.to_string());
            if let Ok(neighbors) = graph.neighbors(vertex) {
                for &child in neighbors {
                    if Some(child) != from {
                        tree.push(build_tree(graph, child, Some(vertex)));
                    }
                }
            }
            tree
        }

        Ok(build_tree(self, root, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_two_vertex_tree_when_rendering_then_child_is_nested() {
        let mut graph = TreeGraph::new(2);
        graph.add_edge(0, 1).unwrap();

        let rendered = graph.to_tree_string(0).unwrap().to_string();
        assert!(rendered.starts_with('0'));
        assert!(rendered.contains("└── 1"));
    }

    #[test]
    fn given_out_of_range_root_when_rendering_then_fails() {
        let graph = TreeGraph::new(1);
        assert!(graph.to_tree_string(1).is_err());
    }
}
