// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{QueryError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_EXPORT_FILENAME: &str = "query_export.csv";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub endpoints: EndpointConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: String,
    /// Unset means requests wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Honour HTTP(S)_PROXY style environment variables.
    #[serde(default = "default_true")]
    pub use_system_proxy: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    pub query: String,
    pub export: String,
    pub find_schools: String,
    pub export_schools: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub download_dir: PathBuf,
    pub default_filename: String,
    /// 0 disables truncation.
    #[serde(default)]
    pub max_cell_width: usize,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            query: "/query".to_string(),
            export: "/export".to_string(),
            find_schools: "/find-schools-query".to_string(),
            export_schools: "/export-nearby-schools".to_string(),
        }
    }
}

impl Config {
    /// Layers built-in defaults, then the TOML file at `path` if given, then
    /// `SCHOOL_QUERY__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| QueryError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("SCHOOL_QUERY")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| QueryError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| QueryError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                base_url: "http://127.0.0.1:5000".to_string(),
                timeout_secs: None,
                use_system_proxy: true,
            },
            endpoints: EndpointConfig::default(),
            output: OutputConfig {
                download_dir: PathBuf::from("."),
                default_filename: DEFAULT_EXPORT_FILENAME.to_string(),
                max_cell_width: 0,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.server.base_url)?;

        for endpoint in [
            &self.endpoints.query,
            &self.endpoints.export,
            &self.endpoints.find_schools,
            &self.endpoints.export_schools,
        ] {
            Validator::validate_endpoint(endpoint)?;
        }

        if self.output.default_filename.trim().is_empty() {
            return Err(QueryError::Config(
                "default_filename must not be empty".to_string(),
            ));
        }

        if self.server.timeout_secs == Some(0) {
            return Err(QueryError::Config(
                "timeout_secs must be greater than 0 when set".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.endpoints.find_schools, "/find-schools-query");
        assert_eq!(config.output.default_filename, "query_export.csv");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = Config::default_config();
        config.server.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_relative_endpoint() {
        let mut config = Config::default_config();
        config.endpoints.export = "export".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[server]\nbase_url = \"https://schools.example.org\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.server.base_url, "https://schools.example.org");
        assert_eq!(config.endpoints.query, "/query");
        assert_eq!(config.output.default_filename, "query_export.csv");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
base_url = "http://schools.internal:8080"

[endpoints]
query = "/query"
export = "/export"
find_schools = "/find-schools-query"
export_schools = "/export-nearby-schools"

[output]
download_dir = "downloads"
default_filename = "query_export.csv"
max_cell_width = 40
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.server.base_url, "http://schools.internal:8080");
        assert_eq!(config.server.timeout_secs, None);
        assert_eq!(config.output.max_cell_width, 40);
        assert_eq!(config.output.download_dir, PathBuf::from("downloads"));
    }
}
