//! CLI module for Routemap

mod args;

pub use args::{Args, Command};

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::graph::GraphBuilder;
use crate::manifest::RouteManifest;
use crate::output::{DiagramGenerator, HtmlConfig, HtmlGenerator};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    match args.command {
        Command::Visualize {
            manifest,
            output,
            include_admin,
            format,
            direction,
            title,
            config,
            verbose,
        } => {
            // Load config file if it exists
            let mut cfg = if let Some(config_path) = &config {
                Config::load_or_default(config_path)
            } else {
                Config::load_or_default(Path::new("routemap.toml"))
            };

            // Merge CLI arguments (CLI takes precedence)
            cfg.merge_cli(output, format, include_admin, direction, title);
            cfg.validate()?;

            if verbose {
                println!("Manifest: {}", manifest.display());
                println!("Output: {}", cfg.output.file.display());
                println!("Format: {:?}", cfg.output.format);
                println!("Direction: {}", cfg.diagram.direction);
                println!("Include admin: {}", cfg.routes.include_admin);
            }

            if !manifest.exists() {
                return Err(crate::error::Error::PathNotFound(manifest));
            }

            println!("Analyzing routes...");
            let routes = RouteManifest::load(&manifest)?;

            let stats = routes.stats();
            println!(
                "Found {} route groups, {} handlers",
                stats.groups, stats.handlers
            );

            let graph = GraphBuilder::new()
                .with_include_admin(cfg.routes.include_admin)
                .with_admin_prefixes(cfg.routes.admin_prefixes.clone())
                .build(&routes.routes);

            let graph_stats = graph.stats();
            println!(
                "Graph: {} URL groups, {} views, {} edges",
                graph_stats.urls, graph_stats.views, graph_stats.edges
            );

            // Page title: CLI/config first, then the manifest's project name
            let page_title = cfg
                .output
                .title
                .as_deref()
                .or(routes.project.as_deref())
                .unwrap_or(&cfg.project.name)
                .to_string();

            let diagram = DiagramGenerator::new()
                .with_direction(&cfg.diagram.direction)
                .generate(&graph);

            let written = match cfg.output.format {
                OutputFormat::Html => {
                    let html_config = HtmlConfig {
                        output_file: cfg.output.file.clone(),
                        title: page_title,
                    };
                    let generator = HtmlGenerator::new(html_config)?;
                    generator.generate(&diagram)?
                }
                OutputFormat::Mermaid => write_output(&cfg.output.file, &diagram)?,
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&graph)?;
                    write_output(&cfg.output.file, &json)?
                }
            };

            println!("Done! File generated: {}", written.display());

            Ok(())
        }

        Command::Version => {
            println!("routemap {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Write text output, returning the resolved path
fn write_output(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, contents)?;

    Ok(path.canonicalize().unwrap_or_else(|_| path.to_path_buf()))
}
