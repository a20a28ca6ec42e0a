//! Repository configuration file support.
//!
//! Reads the backend selection and Postgres pool settings from a
//! `repository.toml` file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::RepositoryError;
use crate::db::PostgresConfig;

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub postgres: PostgresSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// Postgres connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresSettings {
    #[serde(default)]
    pub database_url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout: u64,
}

impl Default for PostgresSettings {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            idle_timeout: default_idle_timeout(),
        }
    }
}

fn default_max_connections() -> u32 {
    4
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::configuration(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in the current directory, then
    /// `backend/`, then the parent directory.
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(RepositoryError::configuration(
            "No repository.toml found in standard locations",
        ))
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, String> {
        RepositoryType::from_str(&self.repository.repo_type)
    }

    /// Convert to PostgresConfig if this is a Postgres configuration.
    #[cfg(feature = "postgres-repo")]
    pub fn to_postgres_config(&self) -> Result<Option<PostgresConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type != RepositoryType::Postgres {
            return Ok(None);
        }

        if self.postgres.database_url.is_empty() {
            return Err(RepositoryError::configuration(
                "Postgres repository requires 'postgres.database_url' setting",
            ));
        }

        Ok(Some(PostgresConfig {
            database_url: self.postgres.database_url.clone(),
            max_pool_size: self.postgres.max_connections,
            min_pool_size: self.postgres.min_connections,
            connection_timeout_sec: self.postgres.connect_timeout,
            idle_timeout_sec: self.postgres.idle_timeout,
        }))
    }

    /// Convert to PostgresConfig when the feature is disabled.
    #[cfg(not(feature = "postgres-repo"))]
    pub fn to_postgres_config(&self) -> Result<Option<PostgresConfig>, RepositoryError> {
        let repo_type = self.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        if repo_type == RepositoryType::Postgres {
            return Err(RepositoryError::configuration(
                "Postgres repository feature not enabled",
            ));
        }

        Ok(None)
    }
}
