//! CLI layer: argument parsing, command dispatch, output formatting

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
