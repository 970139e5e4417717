//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate visual URL route maps from routing tables
#[derive(Parser, Debug)]
#[command(name = "routemap")]
#[command(about = "Generate visual URL route maps from routing tables")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a visual map of the routes in a manifest
    Visualize {
        /// Path to the route manifest (JSON)
        manifest: PathBuf,

        /// Output file (default: url_map.html)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Include admin routes in the visualization
        #[arg(long)]
        include_admin: bool,

        /// Output format (html, mermaid, json)
        #[arg(long)]
        format: Option<String>,

        /// Diagram layout direction (LR, RL, TB, BT)
        #[arg(long)]
        direction: Option<String>,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show version information
    Version,
}
