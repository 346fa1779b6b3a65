//! Configuration management for press.
//!
//! Parses `press.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! All paths in the file are resolved relative to the config file
//! location; when no file is found, defaults are rooted at the start
//! directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "press.toml";

/// Error returned when configuration loading fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Config file is not valid TOML.
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// I/O error reading the config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded
/// config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown source directory.
    pub source_dir: Option<PathBuf>,
    /// Override template file.
    pub template: Option<PathBuf>,
    /// Override static assets directory.
    pub static_dir: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
}

/// Raw `[site]` section as written in TOML (paths are relative strings).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SiteConfigRaw {
    source_dir: Option<PathBuf>,
    template: Option<PathBuf>,
    static_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

/// Raw config file contents.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigRaw {
    site: SiteConfigRaw,
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Markdown source directory.
    pub source_dir: PathBuf,
    /// HTML template file.
    pub template: PathBuf,
    /// Static assets directory.
    pub static_dir: PathBuf,
    /// Output directory.
    pub output_dir: PathBuf,
    /// Path to the config file, if one was loaded.
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist and
    /// [`ConfigError::Parse`] if it is not valid TOML.
    pub fn load(path: &Path, settings: &CliSettings) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let raw: ConfigRaw = toml::from_str(&std::fs::read_to_string(path)?)?;
        let root = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Ok(Self::resolve(raw, &root, Some(path.to_path_buf()), settings))
    }

    /// Discover and load `press.toml` by walking up from `start_dir`.
    ///
    /// Falls back to defaults rooted at `start_dir` when no config file
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a discovered file is invalid.
    pub fn discover(start_dir: &Path, settings: &CliSettings) -> Result<Self, ConfigError> {
        let mut dir = Some(start_dir);
        while let Some(current) = dir {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.is_file() {
                return Self::load(&candidate, settings);
            }
            dir = current.parent();
        }
        Ok(Self::resolve(
            ConfigRaw::default(),
            start_dir,
            None,
            settings,
        ))
    }

    fn resolve(
        raw: ConfigRaw,
        root: &Path,
        config_path: Option<PathBuf>,
        settings: &CliSettings,
    ) -> Self {
        let pick = |cli: &Option<PathBuf>, file: Option<PathBuf>, default: &str| {
            cli.clone()
                .unwrap_or_else(|| root.join(file.unwrap_or_else(|| PathBuf::from(default))))
        };
        Self {
            source_dir: pick(&settings.source_dir, raw.site.source_dir, "content"),
            template: pick(&settings.template, raw.site.template, "template.html"),
            static_dir: pick(&settings.static_dir, raw.site.static_dir, "static"),
            output_dir: pick(&settings.output_dir, raw.site.output_dir, "public"),
            config_path,
        }
    }
}
