//! Condition descriptors and their compiler.
//!
//! A [`Condition`] is an AND-group of `expression key → value` pairs. A key
//! is either a bare column (`name`, compiled to `name = ?`) or a raw SQL
//! fragment that already carries its `?` marker (`age > ?`, used verbatim).
//!
//! A [`ConditionSet`] is one condition, or a list of conditions that are
//! ORed together: disjunctive normal form, one level deep.
//!
//! # Example
//! ```ignore
//! use liteorm::{Condition, ConditionSet};
//!
//! let set = ConditionSet::any([
//!     Condition::new().and("name = ?", "amin").and("age > ?", 31),
//!     Condition::new().and("height", 181),
//! ]);
//! let fragment = liteorm::condition::compile(&set);
//! assert_eq!(fragment.sql, "(name = ? AND age > ?) OR (height = ?)");
//! ```

use crate::row::Row;
use crate::statement::{Fragment, PLACEHOLDER};
use crate::value::Value;

/// An ordered AND-group of expression keys and their bound values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    clauses: Vec<(String, Value)>,
}

impl Condition {
    /// Create an empty condition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause.
    ///
    /// `key` is a column name (becomes `key = ?`) or raw SQL containing a `?`.
    ///
    /// # Security
    /// Keys are embedded verbatim. Never build them from untrusted input.
    pub fn and(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((key.into(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (String, Value)> {
        self.clauses.iter()
    }

    /// Compile to `a = ? AND b > ? ...`.
    pub fn compile(&self) -> Fragment {
        let mut sql = String::new();
        let mut values = Vec::with_capacity(self.clauses.len());
        for (i, (key, value)) in self.clauses.iter().enumerate() {
            if i > 0 {
                sql.push_str(" AND ");
            }
            sql.push_str(key);
            if !key.contains(PLACEHOLDER) {
                sql.push_str(" = ?");
            }
            values.push(value.clone());
        }
        Fragment::new(sql, values)
    }
}

impl<K, V> FromIterator<(K, V)> for Condition
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            clauses: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Every column of the row becomes an equality clause.
impl From<Row> for Condition {
    fn from(row: Row) -> Self {
        Self {
            clauses: row.into_pairs(),
        }
    }
}

/// A condition, or an OR-list of conditions.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionSet {
    /// Clauses of one condition, ANDed
    All(Condition),
    /// Conditions ORed together, each ANDed internally
    Any(Vec<Condition>),
}

impl ConditionSet {
    /// OR the given conditions together.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Total number of bound values across all clauses.
    pub fn value_count(&self) -> usize {
        match self {
            Self::All(c) => c.len(),
            Self::Any(list) => list.iter().map(Condition::len).sum(),
        }
    }
}

impl From<Condition> for ConditionSet {
    fn from(condition: Condition) -> Self {
        Self::All(condition)
    }
}

impl From<Vec<Condition>> for ConditionSet {
    fn from(conditions: Vec<Condition>) -> Self {
        Self::Any(conditions)
    }
}

impl From<Row> for ConditionSet {
    fn from(row: Row) -> Self {
        Self::All(row.into())
    }
}

/// Compile a condition set into a boolean SQL fragment and its values.
///
/// Empty conditions inside an OR-list are skipped, so an empty condition, an
/// empty OR-list, or an OR-list of only empty conditions yields an empty
/// fragment. Callers must not attach an empty fragment to `WHERE` / `HAVING`;
/// the operations in [`crate::ops`] omit the clause in that case.
pub fn compile(set: &ConditionSet) -> Fragment {
    match set {
        ConditionSet::All(condition) => condition.compile(),
        ConditionSet::Any(conditions) => {
            let mut sql = String::new();
            let mut values = Vec::with_capacity(set.value_count());
            for condition in conditions.iter().filter(|c| !c.is_empty()) {
                if !sql.is_empty() {
                    sql.push_str(" OR ");
                }
                let part = condition.compile();
                sql.push('(');
                sql.push_str(&part.sql);
                sql.push(')');
                values.extend(part.values);
            }
            Fragment::new(sql, values)
        }
    }
}
