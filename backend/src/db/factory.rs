//! Repository factory for dependency injection.
//!
//! Builds the `Arc<dyn KpiRepository>` handle the dashboard session reads
//! from, based on environment variables or a `repository.toml` file.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
use super::repositories::PostgresRepository;
use super::repository::{KpiRepository, RepositoryError, RepositoryResult};
use super::PostgresConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Postgres + Diesel implementation
    Postgres,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string (`"postgres"`, `"pg"`, `"local"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "pg" => Ok(Self::Postgres),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. When unset, defaults to Postgres if a
    /// database URL is present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("DATABASE_URL").is_ok() || std::env::var("PG_DATABASE_URL").is_ok() {
            Self::Postgres
        } else {
            Self::Local
        }
    }
}

#[cfg(not(feature = "postgres-repo"))]
fn postgres_disabled() -> RepositoryError {
    RepositoryError::configuration("Postgres repository feature not enabled")
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use flight_kpi::db::{RepositoryFactory, RepositoryType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let repo = RepositoryFactory::create(RepositoryType::Local, None)?;
///     assert!(repo.health_check().await?);
///     Ok(())
/// }
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// `postgres_config` is required for [`RepositoryType::Postgres`].
    pub fn create(
        repo_type: RepositoryType,
        postgres_config: Option<&PostgresConfig>,
    ) -> RepositoryResult<Arc<dyn KpiRepository>> {
        match repo_type {
            RepositoryType::Postgres => {
                #[cfg(feature = "postgres-repo")]
                {
                    let config = postgres_config.ok_or_else(|| {
                        RepositoryError::configuration(
                            "Postgres repository requires PostgresConfig",
                        )
                    })?;
                    let pg = Self::create_postgres(config)?;
                    Ok(pg as Arc<dyn KpiRepository>)
                }
                #[cfg(not(feature = "postgres-repo"))]
                {
                    let _ = postgres_config;
                    Err(postgres_disabled())
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a Postgres repository.
    #[cfg(feature = "postgres-repo")]
    pub fn create_postgres(config: &PostgresConfig) -> RepositoryResult<Arc<PostgresRepository>> {
        let repo = PostgresRepository::new(config.clone())?;
        Ok(Arc::new(repo))
    }

    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn KpiRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    pub fn from_env() -> RepositoryResult<Arc<dyn KpiRepository>> {
        RepositoryBuilder::new().from_env()?.build()
    }

    /// Create repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn KpiRepository>> {
        RepositoryBuilder::new()
            .from_config_file(config_path)?
            .build()
    }

    /// Create repository from the default `repository.toml` location.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn KpiRepository>> {
        RepositoryBuilder::new().from_default_config()?.build()
    }
}

/// Builder for configuring repository creation.
///
/// # Example
/// ```ignore
/// use flight_kpi::db::{PostgresConfig, RepositoryBuilder, RepositoryType};
///
/// // Requires the `postgres-repo` feature.
/// let repo = RepositoryBuilder::new()
///     .repository_type(RepositoryType::Postgres)
///     .postgres_config(PostgresConfig::with_url("postgres://localhost/kpi"))
///     .build()?;
/// ```
pub struct RepositoryBuilder {
    repo_type: RepositoryType,
    postgres_config: Option<PostgresConfig>,
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryBuilder {
    /// Create a new repository builder.
    ///
    /// The initial type follows [`RepositoryType::from_env`].
    pub fn new() -> Self {
        Self {
            repo_type: RepositoryType::from_env(),
            postgres_config: None,
        }
    }

    /// Set the repository type.
    pub fn repository_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = repo_type;
        self
    }

    /// Set the Postgres configuration.
    pub fn postgres_config(mut self, config: PostgresConfig) -> Self {
        self.postgres_config = Some(config);
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, RepositoryError> {
        self.repo_type = RepositoryType::from_env();

        if self.repo_type == RepositoryType::Postgres {
            #[cfg(feature = "postgres-repo")]
            {
                let config = PostgresConfig::from_env().map_err(RepositoryError::configuration)?;
                self.postgres_config = Some(config);
            }
            #[cfg(not(feature = "postgres-repo"))]
            {
                return Err(postgres_disabled());
            }
        }

        Ok(self)
    }

    /// Load configuration from a TOML file.
    pub fn from_config_file<P: AsRef<Path>>(
        self,
        config_path: P,
    ) -> Result<Self, RepositoryError> {
        let repo_config = RepositoryConfig::from_file(config_path)?;
        self.apply_config(&repo_config)
    }

    /// Load configuration from the default `repository.toml` location.
    pub fn from_default_config(self) -> Result<Self, RepositoryError> {
        let repo_config = RepositoryConfig::from_default_location()?;
        self.apply_config(&repo_config)
    }

    fn apply_config(mut self, repo_config: &RepositoryConfig) -> Result<Self, RepositoryError> {
        self.repo_type = repo_config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;
        self.postgres_config = repo_config.to_postgres_config()?;
        Ok(self)
    }

    /// Build the repository instance.
    pub fn build(self) -> RepositoryResult<Arc<dyn KpiRepository>> {
        RepositoryFactory::create(self.repo_type, self.postgres_config.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_parse() {
        assert_eq!(
            "postgres".parse::<RepositoryType>().unwrap(),
            RepositoryType::Postgres
        );
        assert_eq!(
            "PG".parse::<RepositoryType>().unwrap(),
            RepositoryType::Postgres
        );
        assert_eq!(
            " local ".parse::<RepositoryType>().unwrap(),
            RepositoryType::Local
        );
        assert!("snowflake".parse::<RepositoryType>().is_err());
    }

    #[tokio::test]
    async fn test_create_local_is_healthy_and_empty() {
        let repo = RepositoryFactory::create(RepositoryType::Local, None).unwrap();
        assert!(repo.health_check().await.unwrap());
        assert!(repo.fetch_flight_kpis().await.unwrap().is_empty());
    }

    #[test]
    fn test_builder_local() {
        let result = RepositoryBuilder::new()
            .repository_type(RepositoryType::Local)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_postgres_requires_config() {
        let result = RepositoryFactory::create(RepositoryType::Postgres, None);
        assert!(matches!(
            result,
            Err(RepositoryError::ConfigurationError { .. })
        ));
    }
}
