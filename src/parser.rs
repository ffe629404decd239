//! Plain-text edge list format:
//!
//! ```text
//! # comment
//! 10        <- vertex count (first significant line)
//! 0 1       <- one edge per line
//! 1 2
//! ```
//!
//! Blank lines and `#` comments are ignored anywhere in the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;
use tracing::{debug, instrument};

use crate::errors::{GraphError, GraphResult};
use crate::graph::TreeGraph;

#[instrument(level = "debug")]
pub fn load_edge_list(path: &Path) -> GraphResult<TreeGraph> {
    if !path.exists() {
        return Err(GraphError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(GraphError::FileReadError)?;
    let reader = BufReader::new(file);

    let edge_regex = Regex::new(r"^(\d+)\s+(\d+)$").unwrap();
    let mut graph: Option<TreeGraph> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(GraphError::FileReadError)?;
        let line_number = index + 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        match graph.as_mut() {
            None => {
                let vertex_count =
                    content
                        .parse::<usize>()
                        .map_err(|_| GraphError::InvalidFormat {
                            path: path.to_path_buf(),
                            line: line_number,
                            reason: format!("Expected vertex count, got: {}", content),
                        })?;
                debug!("vertex count: {}", vertex_count);
                graph = Some(TreeGraph::new(vertex_count));
            }
            Some(graph) => {
                let caps =
                    edge_regex
                        .captures(content)
                        .ok_or_else(|| GraphError::InvalidFormat {
                            path: path.to_path_buf(),
                            line: line_number,
                            reason: format!("Expected edge 'u v', got: {}", content),
                        })?;
                // regex guarantees digits, overflow is the only parse failure
                let u = parse_vertex(&caps[1], path, line_number)?;
                let v = parse_vertex(&caps[2], path, line_number)?;
                graph.add_edge(u, v)?;
            }
        }
    }

    graph.ok_or_else(|| GraphError::InvalidFormat {
        path: path.to_path_buf(),
        line: 0,
        reason: "Missing vertex count line".to_string(),
    })
}

fn parse_vertex(token: &str, path: &Path, line_number: usize) -> GraphResult<usize> {
    token.parse::<usize>().map_err(|_| GraphError::InvalidFormat {
        path: path.to_path_buf(),
        line: line_number,
        reason: format!("Invalid vertex index: {}", token),
    })
}
