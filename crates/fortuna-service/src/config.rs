//! Service configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fortuna_client::{ClientConfig, GenerationConfig};

/// Service configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote analysis API settings.
    pub api: ApiConfig,
    /// Storage settings.
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from the default path, or defaults if the file
    /// does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = default_config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    /// Save configuration to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Write {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.api.validate());
        errors.extend(self.storage.validate());

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Remote analysis API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API key. Empty or placeholder selects offline demo mode.
    pub key: String,
    /// Base endpoint URL.
    pub endpoint: String,
    /// Generation parameters.
    pub generation: GenerationConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            endpoint: fortuna_client::DEFAULT_ENDPOINT.to_string(),
            generation: GenerationConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Translate into the analysis client's configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_key: self.key.clone(),
            endpoint: self.endpoint.clone(),
            generation: self.generation,
        }
    }

    /// Validate API configuration.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            errors.push(ValidationError {
                field: "api.endpoint".to_string(),
                message: format!(
                    "endpoint must start with http:// or https://, got '{}'",
                    self.endpoint
                ),
            });
        }

        if self.generation.max_output_tokens == 0 {
            errors.push(ValidationError {
                field: "api.generation.max_output_tokens".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if !(0.0..=2.0).contains(&self.generation.temperature) {
            errors.push(ValidationError {
                field: "api.generation.temperature".to_string(),
                message: format!("{} is outside the range 0.0..=2.0", self.generation.temperature),
            });
        }

        if !(0.0..=1.0).contains(&self.generation.top_p) {
            errors.push(ValidationError {
                field: "api.generation.top_p".to_string(),
                message: format!("{} is outside the range 0.0..=1.0", self.generation.top_p),
            });
        }

        errors
    }
}

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory for the settings file and image blobs.
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: fortuna_store::default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Validate storage configuration.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.dir.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "storage.dir".to_string(),
                message: "data directory cannot be empty".to_string(),
            });
        }

        errors
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// A single validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field path (e.g. `api.endpoint`).
    pub field: String,
    /// Description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Default configuration file path.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fortuna")
        .join("config.toml")
}
