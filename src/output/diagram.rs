// Diagram generation for Routemap
//
// Serializes a route graph as Mermaid flowchart syntax.

use crate::graph::RouteGraph;

/// Mermaid style classes for the two node kinds
const CLASS_DEFS: [&str; 2] = [
    "    classDef url fill:#4A90E2,stroke:#2E5C8A,color:#fff",
    "    classDef view fill:#7ED321,stroke:#5FA319,color:#fff",
];

/// Diagram generator for creating Mermaid diagrams
pub struct DiagramGenerator {
    /// Layout direction (LR, RL, TB, BT)
    direction: String,
}

impl DiagramGenerator {
    /// Create a new diagram generator
    pub fn new() -> Self {
        Self {
            direction: "LR".to_string(),
        }
    }

    /// Set layout direction
    pub fn with_direction(mut self, dir: &str) -> Self {
        self.direction = dir.to_string();
        self
    }

    /// Render a route graph as Mermaid text
    pub fn generate(&self, graph: &RouteGraph) -> String {
        let mut lines = Vec::new();
        lines.push(format!("graph {}", self.direction));
        lines.extend(CLASS_DEFS.iter().map(|s| s.to_string()));

        for node in &graph.nodes {
            lines.push(format!(
                "    {}[\"{}\"]:::{}",
                sanitize_id(&node.id),
                node.label,
                node.kind.as_str()
            ));
        }

        for edge in &graph.edges {
            lines.push(format!(
                "    {} --> {}",
                sanitize_id(&edge.source),
                sanitize_id(&edge.target)
            ));
        }

        lines.join("\n")
    }
}

impl Default for DiagramGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sanitize a string for use as a Mermaid node ID
///
/// Example: "/api/v1/users/<int:id>/" -> "_api_v1_users_int_id_"
fn sanitize_id(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '/' | '.' | '-' | ':' => Some('_'),
            '<' | '>' => None,
            _ => Some(c),
        })
        .collect()
}
