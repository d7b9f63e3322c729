use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Directory layout of a site, loaded from `site.toml` in the site root.
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the conventional layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Markdown sources, walked recursively.
    pub content_dir: PathBuf,
    /// Assets copied verbatim into the output directory.
    pub static_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
    /// Generated site output. Removed and recreated on every run.
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
        }
    }
}

impl SiteConfig {
    /// The config file name looked up in the site root.
    pub const FILE_NAME: &'static str = "site.toml";

    /// Loads the config from an explicit path. A missing file is `Ok(None)`,
    /// not an error; callers fall back to [`SiteConfig::default`].
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    /// Loads `site.toml` from the given site root, or the default layout
    /// when the file does not exist.
    pub fn load_or_default(site_root: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(site_root.join(Self::FILE_NAME))?.unwrap_or_default())
    }
}
