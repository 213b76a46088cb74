//! Where the catalog data lives.

use crate::{env_optional, env_or_default, ConfigError, FromEnv};
use std::path::PathBuf;
use strum::{Display, EnumString};

/// Backend used for product records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StorageBackend {
    /// Process memory; data is lost on restart
    #[default]
    Memory,
    /// A single JSON array on disk
    File,
}

/// Storage configuration
///
/// - `PRODUCTS_BACKEND`: `memory` (default) or `file`
/// - `PRODUCTS_FILE`: JSON file for the file backend (default `docs/db/products.json`)
/// - `VEHICLES_FILE`: optional JSON seed for the vehicle catalog
/// - `TICKETS_FILE`: optional headerless CSV with ticket rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub products_backend: StorageBackend,
    pub products_file: PathBuf,
    pub vehicles_file: Option<PathBuf>,
    pub tickets_file: Option<PathBuf>,
}

pub const DEFAULT_PRODUCTS_FILE: &str = "docs/db/products.json";

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            products_backend: StorageBackend::Memory,
            products_file: PathBuf::from(DEFAULT_PRODUCTS_FILE),
            vehicles_file: None,
            tickets_file: None,
        }
    }
}

impl FromEnv for StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let backend = env_or_default("PRODUCTS_BACKEND", "memory");
        let products_backend =
            backend
                .trim()
                .parse::<StorageBackend>()
                .map_err(|_| ConfigError::ParseError {
                    key: "PRODUCTS_BACKEND".to_string(),
                    details: format!("expected 'memory' or 'file', got '{}'", backend),
                })?;

        Ok(Self {
            products_backend,
            products_file: PathBuf::from(env_or_default("PRODUCTS_FILE", DEFAULT_PRODUCTS_FILE)),
            vehicles_file: env_optional("VEHICLES_FILE").map(PathBuf::from),
            tickets_file: env_optional("TICKETS_FILE").map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 4] = [
        "PRODUCTS_BACKEND",
        "PRODUCTS_FILE",
        "VEHICLES_FILE",
        "TICKETS_FILE",
    ];

    #[test]
    fn test_storage_config_defaults() {
        temp_env::with_vars_unset(KEYS, || {
            let config = StorageConfig::from_env().unwrap();
            assert_eq!(config, StorageConfig::default());
        });
    }

    #[test]
    fn test_storage_config_file_backend() {
        temp_env::with_vars(
            [
                ("PRODUCTS_BACKEND", Some("FILE")),
                ("PRODUCTS_FILE", Some("/tmp/products.json")),
                ("VEHICLES_FILE", Some("vehicles.json")),
                ("TICKETS_FILE", None),
            ],
            || {
                let config = StorageConfig::from_env().unwrap();
                assert_eq!(config.products_backend, StorageBackend::File);
                assert_eq!(config.products_file, PathBuf::from("/tmp/products.json"));
                assert_eq!(config.vehicles_file, Some(PathBuf::from("vehicles.json")));
                assert_eq!(config.tickets_file, None);
            },
        );
    }

    #[test]
    fn test_storage_config_rejects_unknown_backend() {
        temp_env::with_var("PRODUCTS_BACKEND", Some("postgres"), || {
            let err = StorageConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("PRODUCTS_BACKEND"));
        });
    }
}
