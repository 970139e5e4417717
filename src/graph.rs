// Route graph built by recursively walking a route tree.
//
// Every traversal level gets a group node for its URL prefix; terminal
// handlers hang off the group that encloses them.

use crate::manifest::{short_handler_name, Route};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Kind of node in the route graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A URL prefix / route group
    Url,
    /// A terminal handler
    View,
}

impl NodeKind {
    /// Name used for the Mermaid style class
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Url => "url",
            NodeKind::View => "view",
        }
    }
}

/// A node in the route graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
}

/// A directed edge between two nodes, by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// The accumulated route graph
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RouteGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(skip)]
    seen_nodes: HashSet<String>,
    #[serde(skip)]
    seen_edges: HashSet<(String, String)>,
}

impl RouteGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, ignoring duplicates by id
    pub fn add_node(&mut self, node: Node) {
        if self.seen_nodes.insert(node.id.clone()) {
            self.nodes.push(node);
        }
    }

    /// Add an edge, ignoring duplicate (source, target) pairs
    pub fn add_edge(&mut self, edge: Edge) {
        if self
            .seen_edges
            .insert((edge.source.clone(), edge.target.clone()))
        {
            self.edges.push(edge);
        }
    }

    /// Find a node by id
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Get statistics about the graph
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            urls: self.nodes.iter().filter(|n| n.kind == NodeKind::Url).count(),
            views: self.nodes.iter().filter(|n| n.kind == NodeKind::View).count(),
            edges: self.edges.len(),
        }
    }
}

/// Statistics about the route graph
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GraphStats {
    pub urls: usize,
    pub views: usize,
    pub edges: usize,
}

/// Walks a route tree and accumulates the graph
pub struct GraphBuilder {
    include_admin: bool,
    admin_prefixes: Vec<String>,
}

impl GraphBuilder {
    /// Create a builder with admin routes excluded
    pub fn new() -> Self {
        Self {
            include_admin: false,
            admin_prefixes: vec!["admin/".to_string()],
        }
    }

    /// Include routes under the admin prefixes
    pub fn with_include_admin(mut self, include: bool) -> Self {
        self.include_admin = include;
        self
    }

    /// Set the prefixes treated as admin routes
    pub fn with_admin_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.admin_prefixes = prefixes;
        self
    }

    /// Build the graph for a route tree, rooted at "/"
    pub fn build(&self, routes: &[Route]) -> RouteGraph {
        let mut graph = RouteGraph::new();
        self.collect(routes, "/", &mut graph);
        graph
    }

    /// Recursively extract nodes and edges from one traversal level
    fn collect(&self, routes: &[Route], prefix: &str, graph: &mut RouteGraph) {
        let root_id = format!("url_{}", prefix);
        graph.add_node(Node {
            id: root_id.clone(),
            label: prefix.to_string(),
            kind: NodeKind::Url,
        });

        for route in routes {
            let pattern = strip_anchors(route.pattern());

            if !self.include_admin && self.is_admin(pattern) {
                continue;
            }

            match route {
                Route::Group { include, .. } => {
                    let new_prefix = format!("{}{}", prefix, pattern);
                    self.collect(include, &new_prefix, graph);

                    // Link parent group to child group
                    graph.add_edge(Edge {
                        source: root_id.clone(),
                        target: format!("url_{}", new_prefix),
                    });
                }
                Route::Handler { handler, .. } => {
                    let view_id = format!("view_{}", handler);
                    graph.add_node(Node {
                        id: view_id.clone(),
                        label: short_handler_name(handler).to_string(),
                        kind: NodeKind::View,
                    });

                    // Link enclosing group to handler
                    graph.add_edge(Edge {
                        source: root_id.clone(),
                        target: view_id,
                    });
                }
            }
        }
    }

    fn is_admin(&self, pattern: &str) -> bool {
        self.admin_prefixes.iter().any(|p| pattern.starts_with(p))
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip regex anchors some frameworks carry in their patterns
fn strip_anchors(pattern: &str) -> &str {
    pattern.trim_start_matches('^').trim_end_matches('$')
}
