use std::env;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::storage::{FileStore, KeyValueStore, MemoryStore};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let backend = StorageBackend::parse(
            &env::var("EVENTWORK_STORAGE").unwrap_or_else(|_| "file".to_string()),
        )?;
        let data_dir = env::var("EVENTWORK_DATA_DIR").unwrap_or_else(|_| ".eventwork".to_string());
        if data_dir.trim().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = match env::var("APP_LOG_FORMAT") {
            Ok(value) => LogFormat::parse(&value)?,
            Err(_) if environment == AppEnvironment::Production => LogFormat::Json,
            Err(_) => LogFormat::Compact,
        };

        Ok(Self {
            environment,
            storage: StorageConfig {
                backend,
                data_dir: PathBuf::from(data_dir),
            },
            telemetry: TelemetryConfig { log_level, format },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
}

impl StorageBackend {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            _ => Err(ConfigError::InvalidStorageBackend {
                value: value.to_string(),
            }),
        }
    }
}

/// Where the account, job, and application collections live.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn open(&self) -> Arc<dyn KeyValueStore> {
        match self.backend {
            StorageBackend::Memory => Arc::new(MemoryStore::default()),
            StorageBackend::File => Arc::new(FileStore::new(&self.data_dir)),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat {
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidStorageBackend { value: String },
    EmptyDataDir,
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStorageBackend { value } => write!(
                f,
                "EVENTWORK_STORAGE must be 'memory' or 'file', got '{}'",
                value
            ),
            ConfigError::EmptyDataDir => write!(f, "EVENTWORK_DATA_DIR must not be empty"),
            ConfigError::InvalidLogFormat { value } => write!(
                f,
                "APP_LOG_FORMAT must be 'compact' or 'json', got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
