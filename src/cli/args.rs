//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

/// Tree metrics via double breadth-first search: diameter, center, distances
#[derive(Parser, Debug)]
#[command(name = "treespan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Show version and author information
    #[arg(long)]
    pub info: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute diameter endpoints and length
    Diameter {
        /// Edge list file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Also print the full vertex sequence of the longest path
        #[arg(short, long)]
        path: bool,
    },

    /// Find the center vertex (midpoint of a diameter path)
    Center {
        /// Edge list file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print BFS distances from a source vertex
    Distances {
        /// Edge list file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Source vertex
        source: usize,
    },

    /// Render the tree rooted at a vertex
    Tree {
        /// Edge list file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Root vertex for the rendering
        #[arg(short, long, default_value_t = 0)]
        root: usize,
    },
}
