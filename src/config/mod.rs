use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog location: an `http(s)://` URL or a filesystem path.
    #[serde(default = "default_catalog_source")]
    pub source: String,
}

fn default_catalog_source() -> String {
    "ideas.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Address the per-idea contact affordance mails to.
    #[serde(default = "default_contact_email")]
    pub email: String,
}

fn default_contact_email() -> String {
    "you@example.com".to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: default_contact_email(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Author line shown in the detail view.
    #[serde(default = "default_author")]
    pub author: String,
}

fn default_author() -> String {
    "Your Name".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
        }
    }
}

pub fn config_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "ideadeck")
        .context("Could not determine config directory")?
        .config_dir()
        .to_path_buf();
    Ok(dir)
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load the config file, or fall back to defaults when none exists.
///
/// An explicitly passed path must exist; the default path is allowed
/// to be absent since every setting has a usable default.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
}

/// Write a starter config with the default settings.
pub fn init(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if path.exists() {
        anyhow::bail!("Config already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(&Config::default())?;
    std::fs::write(&path, content)?;

    println!("Config saved to {}", path.display());
    println!("Edit catalog.source to point at your ideas.json, then run `ideadeck`.");

    Ok(())
}
