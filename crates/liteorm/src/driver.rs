//! The prepare / bind / execute contract liteorm runs statements through.
//!
//! liteorm does not own connections. The embedding host supplies a type
//! implementing [`Driver`] and is responsible for its lifetime; every
//! operation borrows it for exactly one statement.
//!
//! ```ignore
//! struct MyDriver { /* connection handle */ }
//!
//! impl Driver for MyDriver {
//!     type Statement<'a> = MyStatement<'a>;
//!
//!     fn prepare<'a>(&'a self, sql: &str) -> Result<MyStatement<'a>, BoxError> {
//!         Ok(MyStatement { conn: self, sql: sql.to_string() })
//!     }
//! }
//! ```

use crate::error::BoxError;
use crate::row::Row;
use crate::value::Value;
use std::future::Future;

/// What a driver reports after running a statement to completion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutcome {
    /// Rows produced by the statement (e.g. via `RETURNING *`)
    pub results: Vec<Row>,
    /// Whether the engine considers the statement successful
    pub success: bool,
    /// Engine-reported reason when `success` is false
    pub error: Option<String>,
}

impl QueryOutcome {
    /// A successful outcome with the given rows.
    pub fn ok(results: Vec<Row>) -> Self {
        Self {
            results,
            success: true,
            error: None,
        }
    }

    /// A non-success outcome with an engine-reported reason.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// A database handle that can prepare SQL text.
pub trait Driver: Send + Sync {
    /// A statement prepared on this driver.
    type Statement<'a>: PreparedStatement
    where
        Self: 'a;

    /// Prepare `sql`, which uses `?` placeholders.
    fn prepare<'a>(&'a self, sql: &str) -> Result<Self::Statement<'a>, BoxError>;
}

/// A prepared statement waiting for its parameter values.
pub trait PreparedStatement: Send {
    /// The statement with values bound.
    type Bound: BoundStatement;

    /// Bind values positionally, first value to the first `?`.
    fn bind(self, values: Vec<Value>) -> Self::Bound;
}

/// A statement ready to run.
pub trait BoundStatement: Send {
    /// Run the statement and collect every row.
    fn all(self) -> impl Future<Output = Result<QueryOutcome, BoxError>> + Send;

    /// Run the statement and return the first row, if any.
    fn first(self) -> impl Future<Output = Result<Option<Row>, BoxError>> + Send;
}
