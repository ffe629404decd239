use std::path::Path;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::graph::TreeGraph;
use crate::parser::load_edge_list;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Diameter { file, path }) => _diameter(file, *path),
        Some(Commands::Center { file }) => _center(file),
        Some(Commands::Distances { file, source }) => _distances(file, *source),
        Some(Commands::Tree { file, root }) => _tree(file, *root),
        None => Ok(()),
    }
}

#[instrument]
fn _diameter(file: &Path, with_path: bool) -> CliResult<()> {
    let graph = load_edge_list(file)?;
    debug!(
        "loaded {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    let diameter = graph.longest_path()?;
    output::info(&diameter);
    if with_path {
        let path = graph.diameter_path()?;
        output::detail(&path.iter().join(" -> "));
    }
    Ok(())
}

#[instrument]
fn _center(file: &Path) -> CliResult<()> {
    let graph = load_edge_list(file)?;
    let diameter = graph.longest_path()?;
    let center = graph.center()?;
    output::action("Center", &center);
    output::detail(&diameter);
    Ok(())
}

#[instrument]
fn _distances(file: &Path, source: usize) -> CliResult<()> {
    let graph = load_edge_list(file)?;
    let distances = graph.distances(source)?;
    output::header(&format!("BFS distances from vertex {}", source));
    for (vertex, distance) in distances.iter().enumerate() {
        match distance {
            Some(d) => output::detail(&format!("{}: {}", vertex, d)),
            None => output::detail(&format!("{}: unreachable", vertex)),
        }
    }
    Ok(())
}

#[instrument]
fn _tree(file: &Path, root: usize) -> CliResult<()> {
    let graph = load_edge_list(file)?;
    let rendered = graph.to_tree_string(root)?;
    output::info(&rendered);
    Ok(())
}
