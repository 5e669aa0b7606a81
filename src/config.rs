use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::{
    query::PathExpr,
    translations::{DEFAULT_PRIMARY_LOCALE, OrphanPolicy},
};

pub const CONFIG_FILE_NAME: &str = ".dashi18nrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,
    /// Stopwords added to the built-in Spanish set.
    #[serde(default)]
    pub stopwords: Vec<String>,
    /// Path expressions evaluated after the built-in catalog.
    #[serde(default)]
    pub extra_paths: Vec<String>,
    #[serde(default)]
    pub orphan_policy: OrphanPolicy,
}

fn default_primary_locale() -> String {
    DEFAULT_PRIMARY_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_locale: default_primary_locale(),
            stopwords: Vec::new(),
            extra_paths: Vec::new(),
            orphan_policy: OrphanPolicy::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the primary locale is empty or any of `extraPaths`
    /// is not a valid path expression.
    pub fn validate(&self) -> Result<()> {
        if self.primary_locale.trim().is_empty() {
            anyhow::bail!("'primaryLocale' must not be empty");
        }

        for path in &self.extra_paths {
            PathExpr::parse(path).context("Invalid path in 'extraPaths'")?;
        }

        Ok(())
    }
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
    /// Where the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
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
