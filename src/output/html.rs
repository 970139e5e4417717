// HTML page generator
//
// Wraps rendered Mermaid text in a static HTML page and writes it to
// disk. The page pulls Mermaid from the CDN and renders client-side.

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

/// Configuration for HTML generation
#[derive(Debug, Clone)]
pub struct HtmlConfig {
    /// Path of the generated file
    pub output_file: PathBuf,
    /// Page title and heading
    pub title: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from("url_map.html"),
            title: "URL Map".to_string(),
        }
    }
}

/// HTML page generator
pub struct HtmlGenerator {
    config: HtmlConfig,
    tera: Tera,
}

impl HtmlGenerator {
    /// Create a new HTML generator with the embedded template
    pub fn new(config: HtmlConfig) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(
            "url_map.html",
            include_str!("../../templates/url_map.html.tera"),
        )?;

        Ok(Self { config, tera })
    }

    /// Render the page for a Mermaid diagram
    pub fn render(&self, diagram: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("title", &self.config.title);
        context.insert("diagram", diagram);

        Ok(self.tera.render("url_map.html", &context)?)
    }

    /// Render and write the page, returning the resolved output path
    pub fn generate(&self, diagram: &str) -> Result<PathBuf> {
        let html = self.render(diagram)?;

        if let Some(parent) = self.config.output_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.config.output_file, html)?;

        let resolved = self
            .config
            .output_file
            .canonicalize()
            .unwrap_or_else(|_| self.config.output_file.clone());
        Ok(resolved)
    }

    /// Get the configured output path
    pub fn output_file(&self) -> &Path {
        &self.config.output_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_html_config_default() {
        let config = HtmlConfig::default();
        assert_eq!(config.output_file, PathBuf::from("url_map.html"));
        assert_eq!(config.title, "URL Map");
    }

    #[test]
    fn test_render_contains_title_and_diagram() {
        let generator = HtmlGenerator::new(HtmlConfig::default()).unwrap();
        let html = generator.render("graph LR\n    a --> b").unwrap();

        assert!(html.contains("<title>URL Map</title>"));
        assert!(html.contains("<h1>URL Map</h1>"));
        assert!(html.contains("graph LR"));
        assert!(html.contains("a --> b"));
    }

    #[test]
    fn test_render_diagram_not_escaped() {
        let generator = HtmlGenerator::new(HtmlConfig::default()).unwrap();
        let html = generator.render("graph LR\n    a --> b").unwrap();
        assert!(!html.contains("--&gt;"));
    }

    #[test]
    fn test_render_includes_mermaid_bootstrap() {
        let generator = HtmlGenerator::new(HtmlConfig::default()).unwrap();
        let html = generator.render("graph LR").unwrap();

        assert!(html.contains("<pre class=\"mermaid\">"));
        assert!(html.contains("cdn.jsdelivr.net/npm/mermaid@11"));
        assert!(html.contains("mermaid.initialize({ startOnLoad: true })"));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let config = HtmlConfig {
            output_file: dir.path().join("url_map.html"),
            title: "Test".to_string(),
        };

        let generator = HtmlGenerator::new(config).unwrap();
        let path = generator.generate("graph LR").unwrap();

        assert!(path.exists());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("graph LR"));
    }

    #[test]
    fn test_generate_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let config = HtmlConfig {
            output_file: dir.path().join("docs/maps/url_map.html"),
            title: "Test".to_string(),
        };

        let generator = HtmlGenerator::new(config).unwrap();
        let path = generator.generate("graph LR").unwrap();
        assert!(path.exists());
    }
}
