use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::migration::MigrationPaths;

pub const CONFIG_FILE_NAME: &str = ".loctoolrc.json";

/// Locations of the documents `migrate` works on.
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Localization dump extracted from the game.
    #[serde(default = "default_source")]
    pub source: String,
    /// Content patch whose entries are rewired to i18n references.
    #[serde(default = "default_content")]
    pub content: String,
    /// Flat i18n file receiving new translations.
    #[serde(default = "default_i18n")]
    pub i18n: String,
}

fn default_source() -> String {
    "Objects.es-ES.json".to_string()
}

fn default_content() -> String {
    "content.json".to_string()
}

fn default_i18n() -> String {
    "i18n/es.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            content: default_content(),
            i18n: default_i18n(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("source", &self.source),
            ("content", &self.content),
            ("i18n", &self.i18n),
        ] {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", field);
            }
        }
        Ok(())
    }

    /// Resolve the configured paths against `base_dir`.
    pub fn resolve(&self, base_dir: &Path) -> MigrationPaths {
        MigrationPaths {
            source: base_dir.join(&self.source),
            content: base_dir.join(&self.content),
            i18n: base_dir.join(&self.i18n),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or None when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    /// Directory relative config paths are resolved against.
    pub fn base_dir<'a>(&'a self, fallback: &'a Path) -> &'a Path {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(fallback)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
