//! Recording driver used by unit tests.

use crate::driver::{BoundStatement, Driver, PreparedStatement, QueryOutcome};
use crate::error::BoxError;
use crate::row::Row;
use crate::value::Value;
use std::sync::Mutex;

/// How the mock answers every statement.
#[derive(Debug, Clone)]
pub(crate) enum Reply {
    /// Succeed, returning these rows
    Rows(Vec<Row>),
    /// Report `success: false` with this reason
    Failed(Option<String>),
    /// Raise from `all()` / `first()`
    Raise(String),
    /// Raise from `prepare()`
    RejectPrepare(String),
}

#[derive(Debug)]
pub(crate) struct MockDriver {
    reply: Reply,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MockDriver {
    pub(crate) fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn returning(rows: Vec<Row>) -> Self {
        Self::new(Reply::Rows(rows))
    }

    pub(crate) fn empty() -> Self {
        Self::returning(Vec::new())
    }

    /// Statements that reached `all()` / `first()`, in order.
    pub(crate) fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    /// The single statement that ran.
    pub(crate) fn only_call(&self) -> (String, Vec<Value>) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn record(&self, sql: String, values: Vec<Value>) {
        self.calls.lock().unwrap().push((sql, values));
    }
}

pub(crate) struct MockStatement<'a> {
    driver: &'a MockDriver,
    sql: String,
}

pub(crate) struct MockBound<'a> {
    driver: &'a MockDriver,
    sql: String,
    values: Vec<Value>,
}

impl Driver for MockDriver {
    type Statement<'a> = MockStatement<'a>;

    fn prepare<'a>(&'a self, sql: &str) -> Result<MockStatement<'a>, BoxError> {
        if let Reply::RejectPrepare(reason) = &self.reply {
            return Err(reason.clone().into());
        }
        Ok(MockStatement {
            driver: self,
            sql: sql.to_string(),
        })
    }
}

impl<'a> PreparedStatement for MockStatement<'a> {
    type Bound = MockBound<'a>;

    fn bind(self, values: Vec<Value>) -> MockBound<'a> {
        MockBound {
            driver: self.driver,
            sql: self.sql,
            values,
        }
    }
}

impl BoundStatement for MockBound<'_> {
    async fn all(self) -> Result<QueryOutcome, BoxError> {
        self.driver.record(self.sql, self.values);
        match &self.driver.reply {
            Reply::Rows(rows) => Ok(QueryOutcome::ok(rows.clone())),
            Reply::Failed(reason) => Ok(QueryOutcome {
                results: Vec::new(),
                success: false,
                error: reason.clone(),
            }),
            Reply::Raise(reason) | Reply::RejectPrepare(reason) => Err(reason.clone().into()),
        }
    }

    async fn first(self) -> Result<Option<Row>, BoxError> {
        self.driver.record(self.sql, self.values);
        match &self.driver.reply {
            Reply::Rows(rows) => Ok(rows.first().cloned()),
            Reply::Failed(_) => Ok(None),
            Reply::Raise(reason) | Reply::RejectPrepare(reason) => Err(reason.clone().into()),
        }
    }
}
