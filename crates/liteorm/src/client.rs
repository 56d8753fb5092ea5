//! A borrowed driver plus execution settings.

use crate::condition::ConditionSet;
use crate::config::ClientConfig;
use crate::driver::Driver;
use crate::error::Result;
use crate::executor;
use crate::ops::{self, Select};
use crate::row::{Assignment, Row};

/// Runs the CRUD operations against a driver owned by the host.
///
/// A `Client` holds no state besides its configuration, so it is cheap to
/// create per request and safe to share between concurrent tasks.
///
/// # Example
/// ```ignore
/// use liteorm::{Client, ClientConfig, Condition, row};
///
/// let client = Client::new(&db).with_config(ClientConfig::new().no_truncate());
/// let updated = client
///     .update(
///         "albums",
///         &row! { "Title" => "X!" },
///         Some(&Condition::new().and("Title", "X").into()),
///     )
///     .await?;
/// ```
#[derive(Debug)]
pub struct Client<'d, D> {
    driver: &'d D,
    config: ClientConfig,
}

impl<D> Clone for Client<'_, D> {
    fn clone(&self) -> Self {
        Self {
            driver: self.driver,
            config: self.config.clone(),
        }
    }
}

impl<'d, D: Driver> Client<'d, D> {
    /// Create a client with the default configuration.
    pub fn new(driver: &'d D) -> Self {
        Self {
            driver,
            config: ClientConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying driver.
    pub fn driver(&self) -> &'d D {
        self.driver
    }

    /// See [`ops::insert`].
    pub async fn insert(&self, table: &str, row: &Row) -> Result<Option<Row>> {
        let stmt = ops::build_insert(table, row)?;
        executor::execute_first_with(self.driver, &self.config, &stmt.sql, stmt.values).await
    }

    /// See [`ops::insert_many`].
    pub async fn insert_many(&self, table: &str, rows: &[Row]) -> Result<Vec<Row>> {
        let stmt = ops::build_insert_many(table, rows)?;
        executor::execute_all_with(self.driver, &self.config, &stmt.sql, stmt.values).await
    }

    /// See [`ops::query`].
    pub async fn query(&self, table: &str, select: &Select) -> Result<Vec<Row>> {
        let stmt = ops::build_select(table, select);
        executor::execute_all_with(self.driver, &self.config, &stmt.sql, stmt.values).await
    }

    /// See [`ops::update`].
    pub async fn update(
        &self,
        table: &str,
        assignment: &Assignment,
        filter: Option<&ConditionSet>,
    ) -> Result<Vec<Row>> {
        let stmt = ops::build_update(table, assignment, filter)?;
        executor::execute_all_with(self.driver, &self.config, &stmt.sql, stmt.values).await
    }

    /// See [`ops::remove`].
    pub async fn remove(&self, table: &str, filter: Option<&ConditionSet>) -> Result<Vec<Row>> {
        let stmt = ops::build_delete(table, filter);
        executor::execute_all_with(self.driver, &self.config, &stmt.sql, stmt.values).await
    }
}
