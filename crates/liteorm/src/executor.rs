//! Runs finished SQL through a [`Driver`] and normalizes failures.
//!
//! Every failure is returned as an [`Error`] whose message ends with the exact
//! SQL text, so a failed call is always diagnosable from the error alone.
//! There is one attempt per call and no partial result on failure.

use crate::config::ClientConfig;
use crate::driver::{BoundStatement, Driver, PreparedStatement};
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::Value;
use tracing::Level;

/// The type of SQL statement being run, used as a log field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Select,
    Insert,
    Update,
    Delete,
    Other,
}

impl QueryType {
    /// Detect the statement type from its leading keyword.
    pub fn from_sql(sql: &str) -> Self {
        let keyword = sql
            .trim_start()
            .split(|c: char| !c.is_ascii_alphabetic())
            .next()
            .unwrap_or_default();
        if keyword.eq_ignore_ascii_case("select") {
            Self::Select
        } else if keyword.eq_ignore_ascii_case("insert") {
            Self::Insert
        } else if keyword.eq_ignore_ascii_case("update") {
            Self::Update
        } else if keyword.eq_ignore_ascii_case("delete") {
            Self::Delete
        } else {
            Self::Other
        }
    }
}

/// Run `sql` and return every row the driver reports.
pub async fn execute_all<D: Driver>(driver: &D, sql: &str, values: Vec<Value>) -> Result<Vec<Row>> {
    execute_all_with(driver, &ClientConfig::default(), sql, values).await
}

/// [`execute_all`] with explicit logging settings.
pub async fn execute_all_with<D: Driver>(
    driver: &D,
    config: &ClientConfig,
    sql: &str,
    values: Vec<Value>,
) -> Result<Vec<Row>> {
    let query_type = QueryType::from_sql(sql);
    log_statement(config, query_type, sql, values.len());

    let result = run_all(driver, sql, values).await;
    if let Err(err) = &result {
        log_failure(query_type, err);
    }
    result
}

/// Run `sql` and return its first row, or `None` when it produced none.
pub async fn execute_first<D: Driver>(
    driver: &D,
    sql: &str,
    values: Vec<Value>,
) -> Result<Option<Row>> {
    execute_first_with(driver, &ClientConfig::default(), sql, values).await
}

/// [`execute_first`] with explicit logging settings.
pub async fn execute_first_with<D: Driver>(
    driver: &D,
    config: &ClientConfig,
    sql: &str,
    values: Vec<Value>,
) -> Result<Option<Row>> {
    let query_type = QueryType::from_sql(sql);
    log_statement(config, query_type, sql, values.len());

    let result = run_first(driver, sql, values).await;
    if let Err(err) = &result {
        log_failure(query_type, err);
    }
    result
}

async fn run_all<D: Driver>(driver: &D, sql: &str, values: Vec<Value>) -> Result<Vec<Row>> {
    let statement = driver
        .prepare(sql)
        .map_err(|source| Error::driver(source, sql))?;
    let outcome = statement
        .bind(values)
        .all()
        .await
        .map_err(|source| Error::driver(source, sql))?;

    if !outcome.success {
        let message = outcome.error.unwrap_or_else(|| "unknown error".to_string());
        return Err(Error::query_failure(message, sql));
    }
    Ok(outcome.results)
}

async fn run_first<D: Driver>(driver: &D, sql: &str, values: Vec<Value>) -> Result<Option<Row>> {
    let statement = driver
        .prepare(sql)
        .map_err(|source| Error::driver(source, sql))?;
    statement
        .bind(values)
        .first()
        .await
        .map_err(|source| Error::driver(source, sql))
}

fn log_statement(config: &ClientConfig, query_type: QueryType, sql: &str, param_count: usize) {
    /// Dispatch a tracing event at a runtime-determined level.
    macro_rules! emit_at_level {
        ($level:expr, $($field:tt)*) => {
            match $level {
                Level::ERROR => tracing::error!($($field)*),
                Level::WARN  => tracing::warn!($($field)*),
                Level::INFO  => tracing::info!($($field)*),
                Level::DEBUG => tracing::debug!($($field)*),
                Level::TRACE => tracing::trace!($($field)*),
            }
        };
    }

    let sql = config.truncate_sql(sql);
    emit_at_level!(
        config.log_level,
        target: "liteorm.sql",
        query_type = ?query_type,
        param_count,
        sql = %sql,
    );
}

fn log_failure(query_type: QueryType, err: &Error) {
    tracing::warn!(
        target: "liteorm.sql",
        query_type = ?query_type,
        error = %err,
        "statement failed"
    );
}

#[cfg(test)]
mod tests;
