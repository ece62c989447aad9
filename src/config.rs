use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{ExportError, Result};

pub const DEFAULT_API_URL: &str = "https://api.snyk.io/rest";
pub const DEFAULT_API_VERSION: &str = "2024-10-24";
pub const DEFAULT_OUTPUT: &str = "projects.csv";

const API_URL_ENV: &str = "SNYK_API_URL";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub api_url: Option<String>,
    pub api_version: Option<String>,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// A missing file is not an error and yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(config_path).map_err(|e| ExportError::ConfigRead {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| ExportError::ConfigParse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "snyk-export")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ExportError::NoConfigDir)
    }

    /// Get the API base URL: flag, then env var, then config file, then default
    pub fn api_url(&self, explicit: Option<&str>) -> String {
        self.resolve_api_url(explicit, std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_url(&self, explicit: Option<&str>, from_env: Option<String>) -> String {
        explicit
            .map(String::from)
            .or(from_env)
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    /// Get output path, preferring explicit argument over config
    pub fn resolve_output(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}
