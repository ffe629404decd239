//! treespan: tree metrics via double breadth-first search.
//!
//! A [`TreeGraph`] is an undirected adjacency-list graph assumed to be a
//! tree (connected, acyclic). On top of it sit single-source BFS
//! ([`TreeGraph::distances`], [`TreeGraph::farthest_from`]), the two-BFS
//! diameter computation ([`TreeGraph::longest_path`],
//! [`TreeGraph::diameter_path`]) and the derived center vertex
//! ([`TreeGraph::center`]).

pub mod bfs;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod graph;
pub mod metrics;
pub mod parser;
pub mod render;
pub mod util;

pub use bfs::Farthest;
pub use errors::{GraphError, GraphResult};
pub use graph::TreeGraph;
pub use metrics::Diameter;
