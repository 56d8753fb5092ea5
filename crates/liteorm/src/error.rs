//! Error types for liteorm

use thiserror::Error;

/// Boxed error raised by a [`Driver`](crate::Driver) call.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for liteorm operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for statement building and execution.
///
/// Execution errors always carry the exact SQL text that was sent to the
/// driver, and their `Display` output contains it.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input detected before any SQL was built
    #[error("Shape error: {0}")]
    Shape(String),

    /// The driver ran the statement but reported a non-success outcome
    #[error("{message}; query: {sql}")]
    QueryFailure { message: String, sql: String },

    /// The driver call itself failed
    #[error("{source}; query: {sql}")]
    Driver {
        sql: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Create a shape error
    pub fn shape(message: impl Into<String>) -> Self {
        Self::Shape(message.into())
    }

    pub(crate) fn query_failure(message: impl Into<String>, sql: impl Into<String>) -> Self {
        Self::QueryFailure {
            message: message.into(),
            sql: sql.into(),
        }
    }

    pub(crate) fn driver(source: BoxError, sql: impl Into<String>) -> Self {
        Self::Driver {
            sql: sql.into(),
            source,
        }
    }

    /// The SQL text that failed, if the error happened during execution.
    pub fn sql(&self) -> Option<&str> {
        match self {
            Self::Shape(_) => None,
            Self::QueryFailure { sql, .. } | Self::Driver { sql, .. } => Some(sql),
        }
    }

    /// Check if this is a shape error
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::Shape(_))
    }

    /// Check if the driver reported a non-success outcome
    pub fn is_query_failure(&self) -> bool {
        matches!(self, Self::QueryFailure { .. })
    }

    /// Check if the driver call itself failed
    pub fn is_driver_error(&self) -> bool {
        matches!(self, Self::Driver { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_failure_message_contains_sql() {
        let err = Error::query_failure("no such table: albums", "SELECT * FROM albums;");
        assert_eq!(err.to_string(), "no such table: albums; query: SELECT * FROM albums;");
        assert_eq!(err.sql(), Some("SELECT * FROM albums;"));
        assert!(err.is_query_failure());
    }

    #[test]
    fn driver_error_keeps_source() {
        let source: BoxError = "connection reset".into();
        let err = Error::driver(source, "DELETE FROM t RETURNING *;");
        assert!(err.to_string().contains("DELETE FROM t RETURNING *;"));
        assert!(err.to_string().starts_with("connection reset"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.is_driver_error());
    }

    #[test]
    fn shape_error_has_no_sql() {
        let err = Error::shape("insert_many requires at least one row");
        assert!(err.is_shape_error());
        assert_eq!(err.sql(), None);
    }
}
