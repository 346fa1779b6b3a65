//! `press build` command implementation.

use std::path::PathBuf;

use clap::Args;
use press_config::{CliSettings, Config};
use press_site::SiteBuilder;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover press.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// HTML template file (overrides config).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Static assets directory (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable verbose output (per-page rendering logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the site build fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            source_dir: self.source_dir,
            template: self.template,
            static_dir: self.static_dir,
            output_dir: self.output_dir,
        };

        let config = match &self.config {
            Some(path) => Config::load(path, &settings)?,
            None => Config::discover(&std::env::current_dir()?, &settings)?,
        };

        output.info(&format!(
            "Building {} -> {}",
            config.source_dir.display(),
            config.output_dir.display()
        ));

        let summary = SiteBuilder::new(&config.source_dir, &config.template, &config.output_dir)
            .with_static_dir(&config.static_dir)
            .build()?;

        output.success(&format!(
            "Done: {} pages rendered, {} assets copied",
            summary.pages, summary.assets
        ));
        Ok(())
    }
}
