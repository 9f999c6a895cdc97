//! OTP storage configuration

use serde::{Deserialize, Serialize};

/// Backend holding OTP records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    /// AWS DynamoDB table keyed by identifier and creation time
    #[serde(rename = "dynamodb")]
    DynamoDb,
    /// Redis sorted set per identifier
    Redis,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::DynamoDb => write!(f, "dynamodb"),
            StorageBackend::Redis => write!(f, "redis"),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Selected backend
    pub backend: StorageBackend,

    /// DynamoDB table name
    pub table_name: String,

    /// Redis connection URL
    pub redis_url: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            table_name: String::from("OTP"),
            redis_url: String::from("redis://127.0.0.1:6379"),
        }
    }
}
