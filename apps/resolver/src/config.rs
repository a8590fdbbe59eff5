//! Function configuration loaded from environment variables.

use std::env;

use thiserror::Error;

/// Which [`PostStore`](postsync_core::ports::PostStore) implementation backs the function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    DynamoDb {
        table_name: String,
        /// Endpoint override, e.g. DynamoDB Local.
        endpoint_url: Option<String>,
    },
    Memory,
}

/// How failed operations are reported to the GraphQL API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    /// Resolve the field to `null`.
    Null,
    /// Fail the invocation so the error appears in the response's `errors`.
    Raise,
}

/// Startup configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("POST_TABLE must be set for the DynamoDB store")]
    MissingTable,

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Function configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub error_mode: ErrorMode,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store = match lookup("STORE_BACKEND").as_deref() {
            None | Some("dynamodb") => StoreConfig::DynamoDb {
                table_name: lookup("POST_TABLE")
                    .filter(|name| !name.is_empty())
                    .ok_or(ConfigError::MissingTable)?,
                endpoint_url: lookup("DYNAMODB_ENDPOINT"),
            },
            Some("memory") => StoreConfig::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                });
            }
        };

        let error_mode = match lookup("RESOLVER_ERROR_MODE").as_deref() {
            None | Some("null") => ErrorMode::Null,
            Some("raise") => ErrorMode::Raise,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "RESOLVER_ERROR_MODE",
                    value: other.to_string(),
                });
            }
        };

        Ok(Self { store, error_mode })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_dynamodb_requires_table() {
        assert_eq!(config(&[]).unwrap_err(), ConfigError::MissingTable);
        assert_eq!(
            config(&[("POST_TABLE", "")]).unwrap_err(),
            ConfigError::MissingTable
        );
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("POST_TABLE", "posts")]).unwrap();

        assert_eq!(
            config.store,
            StoreConfig::DynamoDb {
                table_name: "posts".to_string(),
                endpoint_url: None,
            }
        );
        assert_eq!(config.error_mode, ErrorMode::Null);
    }

    #[test]
    fn test_memory_backend_needs_no_table() {
        let config = config(&[("STORE_BACKEND", "memory"), ("RESOLVER_ERROR_MODE", "raise")])
            .unwrap();

        assert_eq!(config.store, StoreConfig::Memory);
        assert_eq!(config.error_mode, ErrorMode::Raise);
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(matches!(
            config(&[("STORE_BACKEND", "redis")]),
            Err(ConfigError::Invalid { key: "STORE_BACKEND", .. })
        ));
    }
}
