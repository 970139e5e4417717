// Route manifest: the tree of route definitions handed to the tool.
//
// Frameworks dump their routing table as JSON; library callers can
// build the same tree directly with the constructors below.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single entry in a routing table
///
/// Mirrors the two shapes routing tables are made of: a group that
/// mounts child routes under a URL prefix (an "include"), and a
/// terminal pattern bound to a handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Route {
    /// A URL prefix owning nested routes
    Group {
        pattern: String,
        include: Vec<Route>,
    },
    /// A terminal pattern resolved by a handler
    Handler {
        pattern: String,
        /// Qualified dotted name, e.g. "shop.views.checkout"
        handler: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl Route {
    /// Create a group route
    pub fn group(pattern: impl Into<String>, include: Vec<Route>) -> Self {
        Route::Group {
            pattern: pattern.into(),
            include,
        }
    }

    /// Create a handler route
    pub fn handler(pattern: impl Into<String>, handler: impl Into<String>) -> Self {
        Route::Handler {
            pattern: pattern.into(),
            handler: handler.into(),
            name: None,
        }
    }

    /// Create a named handler route
    pub fn named_handler(
        pattern: impl Into<String>,
        handler: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Route::Handler {
            pattern: pattern.into(),
            handler: handler.into(),
            name: Some(name.into()),
        }
    }

    /// The URL pattern of this route
    pub fn pattern(&self) -> &str {
        match self {
            Route::Group { pattern, .. } => pattern,
            Route::Handler { pattern, .. } => pattern,
        }
    }

    /// Whether this route mounts nested routes
    pub fn is_group(&self) -> bool {
        matches!(self, Route::Group { .. })
    }
}

/// Short handler name: the final component of a qualified dotted name
pub fn short_handler_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// A routing table dumped by a framework
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// Counts of route kinds in a manifest, for progress reporting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteStats {
    pub groups: usize,
    pub handlers: usize,
}

impl RouteManifest {
    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| Error::manifest(path, e.to_string()))
    }

    /// Count groups and handlers across the whole tree
    pub fn stats(&self) -> RouteStats {
        let mut stats = RouteStats::default();
        count_routes(&self.routes, &mut stats);
        stats
    }
}

fn count_routes(routes: &[Route], stats: &mut RouteStats) {
    for route in routes {
        match route {
            Route::Group { include, .. } => {
                stats.groups += 1;
                count_routes(include, stats);
            }
            Route::Handler { .. } => stats.handlers += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_handler_route() {
        let json = r#"{"pattern": "about/", "handler": "pages.views.about"}"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route, Route::handler("about/", "pages.views.about"));
    }

    #[test]
    fn test_parse_named_handler_route() {
        let json = r#"{"pattern": "about/", "handler": "pages.views.about", "name": "about"}"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert_eq!(route, Route::named_handler("about/", "pages.views.about", "about"));
    }

    #[test]
    fn test_parse_group_route() {
        let json = r#"{
            "pattern": "api/",
            "include": [
                {"pattern": "users/", "handler": "api.views.user_list"}
            ]
        }"#;
        let route: Route = serde_json::from_str(json).unwrap();
        assert!(route.is_group());
        assert_eq!(route.pattern(), "api/");
    }

    #[test]
    fn test_parse_rejects_bare_pattern() {
        // Neither a handler nor a group
        let json = r#"{"pattern": "orphan/"}"#;
        assert!(serde_json::from_str::<Route>(json).is_err());
    }

    #[test]
    fn test_short_handler_name() {
        assert_eq!(short_handler_name("pages.views.about"), "about");
        assert_eq!(short_handler_name("home"), "home");
    }

    #[test]
    fn test_load_manifest() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "project": "demo",
                "routes": [
                    {{"pattern": "", "handler": "demo.views.home"}},
                    {{"pattern": "nested/", "include": [
                        {{"pattern": "test/", "handler": "demo.views.sub_view"}}
                    ]}}
                ]
            }}"#
        )
        .unwrap();

        let manifest = RouteManifest::load(file.path()).unwrap();
        assert_eq!(manifest.project.as_deref(), Some("demo"));
        assert_eq!(manifest.routes.len(), 2);
    }

    #[test]
    fn test_load_missing_manifest() {
        let result = RouteManifest::load(Path::new("/nonexistent/routes.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_malformed_manifest() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = RouteManifest::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Manifest error"));
    }

    #[test]
    fn test_stats_counts_nested_routes() {
        let manifest = RouteManifest {
            project: None,
            routes: vec![
                Route::handler("", "demo.views.home"),
                Route::group(
                    "api/",
                    vec![
                        Route::handler("users/", "api.views.user_list"),
                        Route::group("v2/", vec![Route::handler("users/", "api.v2.user_list")]),
                    ],
                ),
            ],
        };

        let stats = manifest.stats();
        assert_eq!(stats.groups, 2);
        assert_eq!(stats.handlers, 3);
    }

    #[test]
    fn test_manifest_round_trips_through_json() {
        let manifest = RouteManifest {
            project: Some("demo".to_string()),
            routes: vec![Route::group("api/", vec![Route::handler("", "api.views.index")])],
        };

        let json = serde_json::to_string(&manifest).unwrap();
        let back: RouteManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.routes, manifest.routes);
    }
}
