use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::scan::DEFAULT_BUNDLE_SUFFIX;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_app_dirs")]
    pub app_dirs: Vec<String>,
    #[serde(default = "default_bundle_suffix")]
    pub bundle_suffix: String,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_theme() -> String {
    "midnight".to_string()
}
fn default_app_dirs() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec![
            "/Applications".to_string(),
            "/System/Applications".to_string(),
            "~/Applications".to_string(),
        ]
    } else {
        Vec::new()
    }
}
fn default_bundle_suffix() -> String {
    DEFAULT_BUNDLE_SUFFIX.to_string()
}
fn default_database_path() -> String {
    data_dir().join("db.sqlite3").to_string_lossy().to_string()
}
fn default_log_filter() -> String {
    "yay=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            app_dirs: default_app_dirs(),
            bundle_suffix: default_bundle_suffix(),
            database_path: default_database_path(),
            log_filter: default_log_filter(),
        }
    }
}

/// Per-user data directory holding the database and logs.
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("yay")
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("yay")
            .join("config.toml")
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database_path)
    }
}
