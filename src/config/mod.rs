//! Configuration management for CLI, environment variables, and config files.

use crate::error::{QbitError, ValidationIssue};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for qbit-client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration for the WebUI connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Per-request timeout; unset leaves the transport default.
    pub timeout_secs: Option<u64>,
}

/// Configuration for logging output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8080".to_string(),
            username: None,
            password: None,
            timeout_secs: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(path: &PathBuf) -> Result<Self, QbitError> {
        let content = std::fs::read_to_string(path).map_err(|e| QbitError::Io(e.to_string()))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        match ext.as_deref() {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| QbitError::Parse(e.to_string()))
            }
            _ => toml::from_str(&content).map_err(|e| QbitError::Parse(e.to_string())),
        }
    }

    pub fn from_default_locations() -> Result<Self, QbitError> {
        let config_dirs = [
            dirs::config_dir().map(|d| d.join("qbit-client/config.toml")),
            Some(PathBuf::from("/etc/qbit-client/config.toml")),
            Some(PathBuf::from("./qbit-client.toml")),
        ];

        for path in config_dirs.iter().flatten() {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }

    pub fn merge_from_env(mut self) -> Result<Self, QbitError> {
        if let Ok(val) = std::env::var("QBIT_CLIENT_URL") {
            self.api.url = val;
        }
        if let Ok(val) = std::env::var("QBIT_CLIENT_TIMEOUT") {
            if val.is_empty() || !val.chars().all(|c| c.is_ascii_digit()) {
                return Err(QbitError::InvalidArgument(
                    "QBIT_CLIENT_TIMEOUT has invalid format".into(),
                ));
            }
            self.api.timeout_secs = Some(val.parse().map_err(|_| {
                QbitError::InvalidArgument("QBIT_CLIENT_TIMEOUT has invalid format".into())
            })?);
        }
        if let Ok(val) = std::env::var("QBIT_CLIENT_LOG_LEVEL") {
            self.logging.level = val;
        }

        // Auth credentials - support both individual fields and combined format
        if let Ok(auth_str) = std::env::var("QBIT_CLIENT_AUTH_USERPASS") {
            // Combined format: "username:password"
            if let Some((username, password)) = auth_str.split_once(':') {
                self.api.username = Some(username.to_string());
                self.api.password = Some(password.to_string());
            }
        } else {
            if let Ok(val) = std::env::var("QBIT_CLIENT_USERNAME") {
                self.api.username = Some(val);
            }
            if let Ok(val) = std::env::var("QBIT_CLIENT_PASSWORD") {
                self.api.password = Some(val);
            }
        }

        Ok(self)
    }

    pub fn merge_from_cli(mut self, cli: &CliArgs) -> Self {
        if let Some(ref url) = cli.api_url {
            self.api.url = url.clone();
        }

        if let Some(ref username) = cli.username {
            self.api.username = Some(username.clone());
        }

        if let Some(ref password) = cli.password {
            self.api.password = Some(password.clone());
        }

        if let Some(timeout) = cli.timeout_secs {
            self.api.timeout_secs = Some(timeout);
        }

        if cli.verbose {
            self.logging.level = "debug".to_string();
        }

        self
    }

    pub fn load() -> Result<Self, QbitError> {
        Self::from_default_locations()?.merge_from_env()
    }

    /// Load with an explicit `--config` file taking the place of the default
    /// locations, then apply env and CLI overrides.
    pub fn load_with_cli(cli: &CliArgs) -> Result<Self, QbitError> {
        let base = match &cli.config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::from_default_locations()?,
        };
        Ok(base.merge_from_env()?.merge_from_cli(cli))
    }

    pub fn validate(&self) -> Result<(), QbitError> {
        let mut issues = Vec::new();

        if self.api.url.is_empty() {
            issues.push(ValidationIssue {
                field: "api.url".to_string(),
                message: "URL cannot be empty".to_string(),
            });
        } else if let Err(e) = reqwest::Url::parse(&self.api.url) {
            issues.push(ValidationIssue {
                field: "api.url".to_string(),
                message: format!("Invalid URL format: {}", e),
            });
        }

        if self.api.timeout_secs == Some(0) {
            issues.push(ValidationIssue {
                field: "api.timeout_secs".to_string(),
                message: "Timeout must be greater than zero".to_string(),
            });
        }

        if self.api.username.is_some() != self.api.password.is_some() {
            issues.push(ValidationIssue {
                field: "api.username".to_string(),
                message: "Username and password must be set together".to_string(),
            });
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            issues.push(ValidationIssue {
                field: "logging.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels: {}",
                    self.logging.level,
                    valid_levels.join(", ")
                ),
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(QbitError::ValidationError(issues))
        }
    }
}

/// Command-line arguments that override configuration values.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub api_url: Option<String>,
    pub config_file: Option<PathBuf>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: Option<u64>,
    pub verbose: bool,
}
