//! Configuration and input file discovery.
//!
//! ```yaml
//! # config.yaml
//! relative_file_path: data
//! pattern: "*.csv"        # optional
//! ```
//!
//! `relative_file_path` is resolved against the directory holding the
//! config file. `DAYSHAPE_CONFIG` points at another config file and
//! `DAYSHAPE_FOLDER` bypasses the file entirely; both may come from `.env`.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

/// Config file used when neither the command line nor the environment names one.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "DAYSHAPE_CONFIG";

/// Environment variable overriding the input folder.
pub const FOLDER_ENV: &str = "DAYSHAPE_FOLDER";

fn default_pattern() -> String {
    "*.csv".to_string()
}

/// Where to look for input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Folder to scan, relative to the config file's directory
    pub relative_file_path: PathBuf,

    /// File name pattern inside the folder
    #[serde(default = "default_pattern")]
    pub pattern: String,

    #[serde(skip)]
    base_dir: PathBuf,
}

impl Config {
    /// Config scanning `folder` (relative to the current directory).
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            relative_file_path: folder.into(),
            pattern: default_pattern(),
            base_dir: PathBuf::new(),
        }
    }

    /// Load a YAML config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_yaml_str(&content, base_dir).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse YAML text; relative folders resolve against `base_dir`.
    pub fn from_yaml_str(content: &str, base_dir: impl Into<PathBuf>) -> Result<Self, serde_yaml::Error> {
        let mut config: Config = serde_yaml::from_str(content)?;
        config.base_dir = base_dir.into();
        Ok(config)
    }

    /// Resolve from the environment (after loading `.env`):
    /// `DAYSHAPE_FOLDER` if set, otherwise the file named by
    /// `DAYSHAPE_CONFIG`, otherwise `config.yaml`.
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        if let Ok(folder) = env::var(FOLDER_ENV) {
            return Ok(Self::new(folder));
        }

        let path = env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load(&path)
    }

    /// Replace the file name pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Folder to scan, resolved against the config file's directory.
    pub fn folder(&self) -> PathBuf {
        self.base_dir.join(&self.relative_file_path)
    }
}

/// Files in the configured folder matching the pattern, in the order
/// the glob crate enumerates them.
pub fn discover_csv_files(config: &Config) -> ConfigResult<Vec<PathBuf>> {
    let folder = glob::Pattern::escape(&config.folder().to_string_lossy());
    let pattern = Path::new(&folder).join(&config.pattern);

    let mut files = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
