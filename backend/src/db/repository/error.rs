//! Error types for repository operations.
//!
//! Every failure carries an [`ErrorContext`] describing where it happened, so
//! a `DataUnavailable` notice can say which step of the fetch broke.

use std::fmt;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where a repository failure happened.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Step that failed, e.g. `fetch_flight_kpis` or `load_dataset`.
    pub operation: Option<String>,
    /// Table or resource involved, e.g. `flight_kpis`.
    pub entity: Option<String>,
    pub details: Option<String>,
    /// Whether a later, explicit refresh may succeed.
    pub retryable: bool,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("operation", self.operation.as_deref()),
            ("entity", self.entity.as_deref()),
            ("details", self.details.as_deref()),
            ("retryable", self.retryable.then_some("true")),
        ];
        let rendered: Vec<String> = fields
            .iter()
            .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, v)))
            .collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Store unreachable, pool exhausted, or authentication rejected.
    #[error("Connection error: {message} {context}")]
    ConnectionError {
        message: String,
        context: ErrorContext,
    },

    /// The fixed KPI query failed against the store's schema.
    #[error("Query error: {message} {context}")]
    QueryError {
        message: String,
        context: ErrorContext,
    },

    /// A fetched row could not be represented as a record.
    #[error("Data validation error: {message} {context}")]
    ValidationError {
        message: String,
        context: ErrorContext,
    },

    /// Backend selection or pool settings are unusable.
    #[error("Configuration error: {message} {context}")]
    ConfigurationError {
        message: String,
        context: ErrorContext,
    },

    /// A blocking fetch task died before returning.
    #[error("Internal error: {message} {context}")]
    InternalError {
        message: String,
        context: ErrorContext,
    },
}

impl RepositoryError {
    /// The store could not be reached. Marked retryable.
    pub fn connection(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ConnectionError {
            message: message.into(),
            context: ErrorContext {
                retryable: true,
                ..context
            },
        }
    }

    pub fn query(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::QueryError {
            message: message.into(),
            context,
        }
    }

    pub fn validation(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::ValidationError {
            message: message.into(),
            context,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            context: ErrorContext::new("configure_repository"),
        }
    }

    pub fn internal(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::InternalError {
            message: message.into(),
            context,
        }
    }

    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::ConnectionError { context, .. }
            | Self::QueryError { context, .. }
            | Self::ValidationError { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::InternalError { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::ConnectionError { context, .. }
            | Self::QueryError { context, .. }
            | Self::ValidationError { context, .. }
            | Self::ConfigurationError { context, .. }
            | Self::InternalError { context, .. } => context,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.context().retryable
    }

    /// Re-tag the failure with the step that observed it.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.context_mut().operation = Some(operation.into());
        self
    }
}

#[cfg(feature = "postgres-repo")]
impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        let context = ErrorContext::new("fetch_flight_kpis").with_entity("flight_kpis");
        match err {
            Error::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                RepositoryError::connection(info.message(), context)
            }
            Error::DatabaseError(kind, info) => RepositoryError::query(
                info.message(),
                context.with_details(format!("db_error_kind={:?}", kind)),
            ),
            Error::DeserializationError(e) => {
                RepositoryError::validation(format!("Undecodable column: {}", e), context)
            }
            other => RepositoryError::query(other.to_string(), context),
        }
    }
}

#[cfg(feature = "postgres-repo")]
impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        RepositoryError::connection(
            err.to_string(),
            ErrorContext::new("get_connection").with_details("pool_error"),
        )
    }
}
