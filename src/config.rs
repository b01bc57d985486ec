//! YAML configuration file support.
//!
//! One file describes where searches go and how long queries may be.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "toronto"
//!
//! endpoint:
//!   base_url: "https://www.torontopubliclibrary.ca/search.jsp"
//!   query_param: "Ntt"
//!
//! limits:
//!   max_query_chars: 200
//!   max_selection_chars: 500
//! ```
//!
//! Every section is optional and falls back to the built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use canonical::{CanonicalError, QueryConfig};

use crate::endpoint::{EndpointError, SearchEndpoint, DEFAULT_BASE_URL, DEFAULT_QUERY_PARAM};

/// Environment variable the CLI reads a config path from.
pub const CONFIG_ENV_VAR: &str = "CATALOG_SEARCH_CONFIG";

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] EndpointError),

    #[error("invalid limits: {0}")]
    Limits(#[from] CanonicalError),
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogSearchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub endpoint: EndpointYamlConfig,

    #[serde(default)]
    pub limits: QueryConfig,
}

impl CatalogSearchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: CatalogSearchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.endpoint.to_endpoint()?;
        self.limits.validate()?;

        Ok(())
    }

    /// The validated search endpoint described by this file.
    pub fn search_endpoint(&self) -> Result<SearchEndpoint, ConfigLoadError> {
        Ok(self.endpoint.to_endpoint()?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for CatalogSearchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            endpoint: EndpointYamlConfig::default(),
            limits: QueryConfig::default(),
        }
    }
}

/// Search endpoint section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointYamlConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl EndpointYamlConfig {
    fn to_endpoint(&self) -> Result<SearchEndpoint, EndpointError> {
        SearchEndpoint::new(&self.base_url, &self.query_param)
    }
}

impl Default for EndpointYamlConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            query_param: default_query_param(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_query_param() -> String {
    DEFAULT_QUERY_PARAM.to_string()
}
