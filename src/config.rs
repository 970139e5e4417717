use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    pub routes: RoutesConfig,
    pub output: OutputConfig,
    pub diagram: DiagramConfig,
}

/// Project metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
    pub description: Option<String>,
}

/// Route filtering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub include_admin: bool,
    pub admin_prefixes: Vec<String>,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub file: PathBuf,
    pub title: Option<String>,
}

/// Diagram settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub direction: String,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Mermaid,
    Json,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "URL Map".to_string(),
            description: None,
        }
    }
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            include_admin: false,
            admin_prefixes: vec!["admin/".to_string()],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            file: PathBuf::from("url_map.html"),
            title: None,
        }
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            direction: "LR".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        output: Option<PathBuf>,
        format: Option<String>,
        include_admin: bool,
        direction: Option<String>,
        title: Option<String>,
    ) {
        if let Some(out) = output {
            self.output.file = out;
        }

        if let Some(fmt) = format {
            self.output.format = match fmt.as_str() {
                "mermaid" | "mmd" => OutputFormat::Mermaid,
                "json" => OutputFormat::Json,
                _ => OutputFormat::Html,
            };
        }

        if include_admin {
            self.routes.include_admin = true;
        }

        if let Some(dir) = direction {
            self.diagram.direction = dir;
        }

        if let Some(t) = title {
            self.output.title = Some(t);
        }
    }

    /// Title for the generated page, falling back to the project name
    pub fn title(&self) -> &str {
        self.output.title.as_deref().unwrap_or(&self.project.name)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        match self.diagram.direction.as_str() {
            "LR" | "RL" | "TB" | "BT" => {}
            _ => {
                return Err(Error::config_validation(
                    "direction must be one of LR, RL, TB, BT",
                ));
            }
        }

        if self.output.file.as_os_str().is_empty() {
            return Err(Error::config_validation("output file must not be empty"));
        }

        if self.routes.admin_prefixes.iter().any(|p| p.is_empty()) {
            return Err(Error::config_validation("admin prefixes must not be empty"));
        }

        Ok(())
    }
}
