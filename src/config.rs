//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for Pressmark.
#[derive(Debug, Clone, Parser)]
#[command(name = "pressmark", version, about, long_about = None)]
pub struct Config {
    /// Content directory containing markdown articles
    #[arg(default_value = ".")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name
    #[arg(long)]
    pub name: Option<String>,

    /// Skip opening the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the content path does not exist or is not a
    /// directory.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!("Content path does not exist: {}", self.content.display());
        }
        if !self.content.is_dir() {
            bail!(
                "Content path is not a directory: {}",
                self.content.display()
            );
        }

        Ok(())
    }

    /// Returns site name from configuration or the content directory name.
    ///
    /// # Errors
    ///
    /// Returns error if the content path has no name component or contains
    /// invalid UTF8.
    pub fn site_name(&self) -> Result<String> {
        if let Some(name) = &self.name {
            return Ok(name.clone());
        }

        let path = self
            .content
            .canonicalize()
            .unwrap_or_else(|_| self.content.clone());

        path.file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("Cannot extract site name from path: {}", path.display()))
            .map(String::from)
    }
}
