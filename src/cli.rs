//! CLI Tooling
//!
//! Build-time and debugging commands over a site's SEO data: render the
//! resolved head for a route, validate a route metadata map, or print a
//! starter configuration.

use crate::config::{ConfigLoader, SiteConfig};
use crate::head::{HeadSynchronizer, MemoryHead};
use crate::metadata::RouteMetadataMap;
use crate::page::PageWrapper;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Headsync CLI - route metadata resolution and head rendering
#[derive(Parser)]
#[command(name = "headsync")]
#[command(about = "Route-aware SEO metadata resolution and head rendering")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Site configuration file (TOML); defaults to layered loading
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Route metadata map (JSON)
    #[arg(long, default_value = "seo-metadata.json")]
    pub metadata: PathBuf,

    /// Log level override (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the resolved head for a route as HTML
    Render {
        /// Route path to resolve
        #[arg(long)]
        route: String,

        /// Include the Organization identity block
        #[arg(long)]
        organization: bool,

        /// Include the WebSite search block
        #[arg(long)]
        website: bool,
    },
    /// Validate every entry of the route metadata map
    Check,
    /// Print a default site configuration as TOML
    InitConfig,
}

/// Execution context: loaded site config plus the metadata map path.
pub struct CliContext {
    site: SiteConfig,
    metadata_path: PathBuf,
}

impl CliContext {
    pub fn new(config: Option<&Path>, metadata_path: PathBuf) -> anyhow::Result<Self> {
        let site = match config {
            Some(path) => ConfigLoader::load_from_file(path)
                .with_context(|| format!("failed to load site config from {}", path.display()))?,
            None => ConfigLoader::load().context("failed to load site config")?,
        };
        Ok(Self {
            site,
            metadata_path,
        })
    }

    /// The loaded site configuration.
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        match command {
            Commands::Render {
                route,
                organization,
                website,
            } => self.render(route, *organization, *website),
            Commands::Check => self.check(),
            Commands::InitConfig => Ok(ConfigLoader::default_toml()?),
        }
    }

    fn load_store(&self) -> anyhow::Result<RouteMetadataMap> {
        let json = std::fs::read_to_string(&self.metadata_path).with_context(|| {
            format!(
                "failed to read route metadata map {}",
                self.metadata_path.display()
            )
        })?;
        RouteMetadataMap::from_json(&json).context("invalid route metadata map")
    }

    fn render(&self, route: &str, organization: bool, website: bool) -> anyhow::Result<String> {
        let store = Arc::new(self.load_store()?);
        let site = Arc::new(self.site.clone());
        let head = Arc::new(MemoryHead::new());
        let sync = Arc::new(HeadSynchronizer::new(head.clone(), site.clone()));

        let wrapper = PageWrapper::new(site, store, sync, route)
            .with_organization_schema(organization)
            .with_website_schema(website);
        wrapper.mount();

        Ok(head.snapshot().render_html())
    }

    fn check(&self) -> anyhow::Result<String> {
        let store = self.load_store()?;
        let mut problems = Vec::new();

        for (route, entry) in store.entries() {
            if let Some(title) = &entry.title {
                if title.trim().is_empty() {
                    problems.push(format!("{route}: empty title"));
                }
            }
            if let Some(description) = &entry.description {
                if description.trim().is_empty() {
                    problems.push(format!("{route}: empty description"));
                }
            }
            if let Some(canonical) = &entry.canonical {
                if !canonical.starts_with('/')
                    && !canonical.starts_with("http://")
                    && !canonical.starts_with("https://")
                {
                    problems.push(format!("{route}: canonical '{canonical}' is not a path or URL"));
                }
            }
        }

        if problems.is_empty() {
            Ok(format!(
                "checked {} routes, no problems ({})",
                store.len(),
                chrono::Utc::now().to_rfc3339()
            ))
        } else {
            anyhow::bail!(
                "{} problem(s) in {}:\n{}",
                problems.len(),
                self.metadata_path.display(),
                problems.join("\n")
            )
        }
    }
}
