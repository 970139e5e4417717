//! Routemap - Generate visual URL route maps from routing tables
//!
//! Walks a tree of route definitions (loaded from a JSON manifest or
//! handed over through the library API), builds a node/edge graph, and
//! renders it as a Mermaid diagram embedded in a static HTML page.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod manifest;
pub mod output;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use graph::{GraphBuilder, NodeKind, RouteGraph};
pub use manifest::{Route, RouteManifest};
pub use output::{DiagramGenerator, HtmlConfig, HtmlGenerator};
