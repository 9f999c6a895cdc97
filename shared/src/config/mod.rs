//! Configuration module
//!
//! Configuration is layered, lowest priority first:
//! 1. Built-in defaults (`Default` impls of every section)
//! 2. Optional `config/<environment>.toml` file
//! 3. Environment variables prefixed with `OTP`, sections separated by `__`
//!    (e.g. `OTP_STORAGE__BACKEND=dynamodb`, `OTP_SERVER__PORT=9000`)
//!
//! The environment itself is read from `ENVIRONMENT` / `ENV` / `RUST_ENV`.

pub mod environment;
pub mod notification;
pub mod server;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LoggingConfig};
pub use notification::{AwsConfig, NotificationConfig, NotificationProvider};
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

/// Prefix for configuration environment variables
pub const ENV_PREFIX: &str = "OTP";

/// Separator between nested keys in environment variables
pub const ENV_SEPARATOR: &str = "__";

/// Directory searched for per-environment configuration files
pub const CONFIG_DIR: &str = "config";

/// Errors raised while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// OTP lifecycle settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OtpConfig {
    /// Seconds after creation during which an OTP can be verified
    pub expiry_seconds: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self { expiry_seconds: 300 }
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Deployment environment, taken from `ENVIRONMENT` rather than the layered sources
    #[serde(skip)]
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// OTP record storage
    pub storage: StorageConfig,

    /// SMS and email delivery
    pub notification: NotificationConfig,

    /// AWS credentials and region shared by DynamoDB, SNS and SES
    pub aws: AwsConfig,

    /// OTP lifecycle
    pub otp: OtpConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the environment named by `ENVIRONMENT`
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for(Environment::from_env())
    }

    /// Load configuration for an explicit environment
    pub fn load_for(environment: Environment) -> Result<Self, ConfigError> {
        let file = format!("{}/{}", CONFIG_DIR, environment);

        let mut config: AppConfig = config::Config::builder()
            .add_source(config::File::with_name(&file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.environment = environment;
        if config.logging.level.is_none() {
            config.logging = LoggingConfig::for_environment(environment);
        }
        config.validate()?;

        Ok(config)
    }

    /// Reject settings that would make the service unusable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.otp.expiry_seconds <= 0 {
            return Err(ConfigError::Invalid(format!(
                "otp.expiry_seconds must be positive, got {}",
                self.otp.expiry_seconds
            )));
        }
        if self.storage.backend == StorageBackend::DynamoDb && self.storage.table_name.is_empty() {
            return Err(ConfigError::Invalid(
                "storage.table_name is required for the dynamodb backend".to_string(),
            ));
        }
        if self.notification.sender_address.is_empty() {
            return Err(ConfigError::Invalid(
                "notification.sender_address must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Serialises tests that touch process environment variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_environment_variables_override_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let vars = [
            ("OTP_STORAGE__BACKEND", "dynamodb"),
            ("OTP_STORAGE__TABLE_NAME", "Codes"),
            ("OTP_SERVER__PORT", "9000"),
            ("OTP_OTP__EXPIRY_SECONDS", "120"),
        ];
        for (key, value) in vars {
            std::env::set_var(key, value);
        }

        let loaded = AppConfig::load_for(Environment::Production);

        for (key, _) in vars {
            std::env::remove_var(key);
        }
        let config = loaded.unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.storage.backend, StorageBackend::DynamoDb);
        assert_eq!(config.storage.table_name, "Codes");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.otp.expiry_seconds, 120);
        assert_eq!(config.logging.level_or_default(), "info");
    }

    #[test]
    fn test_load_without_overrides_uses_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let config = AppConfig::load_for(Environment::Development).unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level_or_default(), "debug");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.table_name, "OTP");
        assert_eq!(config.notification.provider, NotificationProvider::Mock);
        assert_eq!(
            config.notification.sender_address,
            "notifications.otp@evacrane.com"
        );
        assert_eq!(config.otp.expiry_seconds, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive_expiry() {
        let mut config = AppConfig::default();
        config.otp.expiry_seconds = 0;

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_requires_table_for_dynamodb() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::DynamoDb;
        config.storage.table_name.clear();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let json = r#"{ "storage": { "backend": "redis" }, "server": { "port": 9000 } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Redis);
        assert_eq!(config.storage.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.otp.expiry_seconds, 300);
    }
}
