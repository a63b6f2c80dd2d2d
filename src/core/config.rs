//! Configuration management

use crate::core::{Error, Result};
use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "AUTOSAVE_SITE_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub links: LinksConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("autosave-site").join("config.toml"))
    }

    /// Load configuration from the default location, writing defaults if absent
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.site.url)
            .map_err(|e| Error::Config(format!("Invalid site url '{}': {}", self.site.url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "Site url must be http or https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(())
    }

    /// Save configuration to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Site-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public origin of the site, used for robots.txt and canonical URLs
    #[serde(default = "default_site_url")]
    pub url: String,
    /// Language served without a path prefix
    #[serde(default)]
    pub default_language: Language,
}

fn default_site_url() -> String { "https://autosave.sa".to_string() }

impl SiteConfig {
    /// Site origin without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: default_site_url(),
            default_language: Language::default(),
        }
    }
}

/// Content locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory holding the JSON datasets (None = built-in datasets)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Directory holding blog posts (Markdown with YAML frontmatter)
    #[serde(default = "default_blog_dir")]
    pub blog_dir: PathBuf,
}

fn default_blog_dir() -> PathBuf { PathBuf::from("content/blog") }

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            blog_dir: default_blog_dir(),
        }
    }
}

/// Internal linking settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinksConfig {
    /// Number of related links per section
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of footer cross-links
    #[serde(default = "default_cross_link_limit")]
    pub cross_link_limit: usize,
}

fn default_limit() -> usize { crate::links::DEFAULT_LIMIT }
fn default_cross_link_limit() -> usize { crate::links::DEFAULT_CROSS_LINK_LIMIT }

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            cross_link_limit: default_cross_link_limit(),
        }
    }
}
