//! CRUD entry points.
//!
//! Each operation is a single pass: compile the descriptors, concatenate the
//! SQL, concatenate the values in placeholder order, execute. The `build_*`
//! functions stop before execution and return the [`Statement`] so the exact
//! SQL can be inspected.
//!
//! Table names, column names and raw expressions are embedded verbatim.
//!
//! # Example
//! ```ignore
//! use liteorm::{ops, row, Condition, Select};
//!
//! let artist = ops::insert(&db, "artists", &row! { "Name" => "X" }).await?;
//!
//! let rows = ops::query(
//!     &db,
//!     "albums",
//!     &Select::new()
//!         .columns(vec!["ArtistId", "count(*) as albums"])
//!         .group_by("ArtistId")
//!         .having(Condition::new().and("count(*) > ?", 2)),
//! )
//! .await?;
//! ```

use crate::assignment;
use crate::client::Client;
use crate::condition::{self, ConditionSet};
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::projection::{self, Projection};
use crate::row::{Assignment, Row};
use crate::statement::Statement;
use crate::value::Value;

/// Options for [`query`]: projection, `WHERE`, `GROUP BY` and `HAVING`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    /// Columns to return. Defaults to `*`.
    pub projection: Projection,
    /// `WHERE` condition
    pub filter: Option<ConditionSet>,
    /// Raw `GROUP BY` expression
    pub group_by: Option<String>,
    /// `HAVING` condition. Only emitted together with `group_by`.
    pub having: Option<ConditionSet>,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the projection.
    pub fn columns(mut self, projection: impl Into<Projection>) -> Self {
        self.projection = projection.into();
        self
    }

    /// Set the `WHERE` condition.
    pub fn filter(mut self, filter: impl Into<ConditionSet>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the `GROUP BY` expression.
    pub fn group_by(mut self, group_by: impl Into<String>) -> Self {
        self.group_by = Some(group_by.into());
        self
    }

    /// Set the `HAVING` condition.
    pub fn having(mut self, having: impl Into<ConditionSet>) -> Self {
        self.having = Some(having.into());
        self
    }
}

// ==================== Statement builders ====================

/// `INSERT INTO <table> (<keys>) VALUES (<?,...>) RETURNING *;`
pub fn build_insert(table: &str, row: &Row) -> Result<Statement> {
    if row.is_empty() {
        return Err(Error::shape(format!(
            "insert into {table} requires at least one column"
        )));
    }

    let columns = row.keys().collect::<Vec<_>>().join(",");
    let mut stmt = Statement::new(format!(
        "INSERT INTO {table} ({columns}) VALUES ({}) RETURNING *",
        placeholders(row.len())
    ));
    stmt.values.extend(row.values().cloned());
    Ok(stmt.terminate())
}

/// One `INSERT` with a `VALUES` tuple per row.
///
/// The column list and order come from `rows[0]`. Every later row must have
/// exactly the same columns; they are read by name, so their order may differ.
pub fn build_insert_many(table: &str, rows: &[Row]) -> Result<Statement> {
    let Some(first) = rows.first() else {
        return Err(Error::shape(format!(
            "insert_many into {table} requires at least one row"
        )));
    };
    if first.is_empty() {
        return Err(Error::shape(format!(
            "insert_many into {table}: first row has no columns"
        )));
    }

    let columns: Vec<&str> = first.keys().collect();
    for (i, row) in rows.iter().enumerate().skip(1) {
        if row.len() != columns.len() || !columns.iter().all(|c| row.contains(c)) {
            return Err(Error::shape(format!(
                "insert_many into {table}: row {i} columns ({}) differ from row 0 ({})",
                row.keys().collect::<Vec<_>>().join(","),
                columns.join(",")
            )));
        }
    }

    let tuple = format!("({})", placeholders(columns.len()));
    let tuples = vec![tuple.as_str(); rows.len()].join(",");

    let mut stmt = Statement::new(format!(
        "INSERT INTO {table} ({}) VALUES {tuples} RETURNING *",
        columns.join(",")
    ));
    stmt.values.reserve(columns.len() * rows.len());
    for row in rows {
        for column in &columns {
            stmt.values
                .push(row.get(column).cloned().unwrap_or(Value::Null));
        }
    }
    Ok(stmt.terminate())
}

/// `SELECT <projection> FROM <table> [WHERE ..] [GROUP BY .. [HAVING ..]];`
pub fn build_select(table: &str, select: &Select) -> Statement {
    let mut stmt = Statement::new(format!(
        "SELECT {} FROM {table}",
        projection::compile(&select.projection)
    ));

    if let Some(filter) = &select.filter {
        stmt.push_clause("WHERE", condition::compile(filter));
    }

    match (&select.group_by, &select.having) {
        (Some(group_by), having) => {
            stmt.push(" GROUP BY ").push(group_by);
            if let Some(having) = having {
                stmt.push_clause("HAVING", condition::compile(having));
            }
        }
        (None, Some(_)) => {
            tracing::warn!(
                target: "liteorm.sql",
                table,
                "HAVING condition ignored: no GROUP BY given"
            );
        }
        (None, None) => {}
    }

    stmt.terminate()
}

/// `UPDATE <table> SET <assignment> [WHERE ..] RETURNING *;`
///
/// Assignment values are bound before `WHERE` values.
pub fn build_update(
    table: &str,
    assignment: &Assignment,
    filter: Option<&ConditionSet>,
) -> Result<Statement> {
    if assignment.is_empty() {
        return Err(Error::shape(format!(
            "update of {table} requires at least one assignment"
        )));
    }

    let mut stmt = Statement::new(format!("UPDATE {table}"));
    stmt.push_clause("SET", assignment::compile(assignment));
    if let Some(filter) = filter {
        stmt.push_clause("WHERE", condition::compile(filter));
    }
    stmt.push(" RETURNING *");
    Ok(stmt.terminate())
}

/// `DELETE FROM <table> [WHERE ..] RETURNING *;`
pub fn build_delete(table: &str, filter: Option<&ConditionSet>) -> Statement {
    let mut stmt = Statement::new(format!("DELETE FROM {table}"));
    if let Some(filter) = filter {
        stmt.push_clause("WHERE", condition::compile(filter));
    }
    stmt.push(" RETURNING *");
    stmt.terminate()
}

fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

// ==================== Execution ====================

/// Insert one row and return it as stored, or `None` if the driver returned
/// no row.
pub async fn insert<D: Driver>(driver: &D, table: &str, row: &Row) -> Result<Option<Row>> {
    Client::new(driver).insert(table, row).await
}

/// Insert several rows in one statement and return what `RETURNING *` reports.
///
/// Fails with [`Error::Shape`] before touching the driver when `rows` is empty
/// or when a row's columns differ from the first row's.
pub async fn insert_many<D: Driver>(driver: &D, table: &str, rows: &[Row]) -> Result<Vec<Row>> {
    Client::new(driver).insert_many(table, rows).await
}

/// Run a `SELECT`.
pub async fn query<D: Driver>(driver: &D, table: &str, select: &Select) -> Result<Vec<Row>> {
    Client::new(driver).query(table, select).await
}

/// Update matching rows and return them.
///
/// A `None` filter, or one that compiles to nothing (an empty [`Condition`] or
/// an OR-list of empty ones), emits no `WHERE` and updates **every row**.
///
/// [`Condition`]: crate::Condition
pub async fn update<D: Driver>(
    driver: &D,
    table: &str,
    assignment: &Assignment,
    filter: Option<&ConditionSet>,
) -> Result<Vec<Row>> {
    Client::new(driver).update(table, assignment, filter).await
}

/// Delete matching rows and return them.
///
/// A `None` filter, or one that compiles to nothing (an empty [`Condition`] or
/// an OR-list of empty ones), emits no `WHERE` and deletes **every row**.
///
/// [`Condition`]: crate::Condition
pub async fn remove<D: Driver>(
    driver: &D,
    table: &str,
    filter: Option<&ConditionSet>,
) -> Result<Vec<Row>> {
    Client::new(driver).remove(table, filter).await
}
