//! # liteorm
//!
//! A minimal query-construction layer over a prepare / bind / execute driver.
//!
//! ## Features
//!
//! - **Ordered descriptors**: rows, conditions and assignments are explicit
//!   lists of pairs, so placeholder order is exactly the order you wrote
//! - **`?` placeholders**: values are always bound, never interpolated
//! - **DNF conditions**: a [`Condition`] ANDs its clauses, a list of them ORs
//! - **Diagnosable errors**: every execution error carries the exact SQL text
//! - **Driver-agnostic**: bring anything that implements [`Driver`]
//!
//! Identifiers and raw expressions are embedded verbatim and never
//! validated. Do not build them from untrusted input.
//!
//! ## Example
//!
//! ```ignore
//! use liteorm::{row, Condition, Select};
//!
//! // INSERT INTO artists (Name) VALUES (?) RETURNING *;
//! let artist = liteorm::insert(&db, "artists", &row! { "Name" => "X" }).await?;
//!
//! // SELECT * FROM people WHERE (name = ? AND age > ?) OR (height = ?);
//! let people = liteorm::query(
//!     &db,
//!     "people",
//!     &Select::new().filter(vec![
//!         Condition::new().and("name = ?", "amin").and("age > ?", 31),
//!         Condition::new().and("height", 181),
//!     ]),
//! )
//! .await?;
//!
//! // UPDATE albums SET Title = ? WHERE Title = ? RETURNING *;
//! let albums = liteorm::update(
//!     &db,
//!     "albums",
//!     &row! { "Title" => "X!" },
//!     Some(&Condition::new().and("Title", "X").into()),
//! )
//! .await?;
//! ```

pub mod assignment;
pub mod client;
pub mod condition;
pub mod config;
pub mod driver;
pub mod error;
pub mod executor;
pub mod ops;
pub mod projection;
pub mod row;
pub mod statement;
pub mod value;

#[cfg(test)]
mod mock;

pub use client::Client;
pub use condition::{Condition, ConditionSet};
pub use config::ClientConfig;
pub use driver::{BoundStatement, Driver, PreparedStatement, QueryOutcome};
pub use error::{BoxError, Error, Result};
pub use executor::{QueryType, execute_all, execute_first};
pub use ops::{Select, insert, insert_many, query, remove, update};
pub use projection::Projection;
pub use row::{Assignment, Row};
pub use statement::{Fragment, PLACEHOLDER, Statement};
pub use value::Value;

// Re-export bytes for blob values
pub use bytes;
