//! SQL text paired with the values for its `?` placeholders.

use crate::value::Value;

/// The placeholder marker for bound parameters.
pub const PLACEHOLDER: char = '?';

/// A compiled piece of SQL and the values for its placeholders, in
/// left-to-right placeholder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub sql: String,
    pub values: Vec<Value>,
}

impl Fragment {
    pub fn new(sql: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            values,
        }
    }

    /// True when no SQL text was produced.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Number of `?` markers in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        count_placeholders(&self.sql)
    }
}

/// A complete, terminated statement ready for the driver.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Statement {
    pub sql: String,
    pub values: Vec<Value>,
}

impl Statement {
    pub(crate) fn new(sql: String) -> Self {
        Self {
            sql,
            values: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Append a clause keyword and its fragment, moving the fragment's values
    /// after the ones already bound. Empty fragments append nothing.
    pub(crate) fn push_clause(&mut self, keyword: &str, fragment: Fragment) -> &mut Self {
        if fragment.is_empty() {
            return self;
        }
        self.sql.push(' ');
        self.sql.push_str(keyword);
        self.sql.push(' ');
        self.sql.push_str(&fragment.sql);
        self.values.extend(fragment.values);
        self
    }

    pub(crate) fn terminate(mut self) -> Self {
        self.sql.push(';');
        self
    }

    pub fn placeholder_count(&self) -> usize {
        count_placeholders(&self.sql)
    }
}

fn count_placeholders(sql: &str) -> usize {
    sql.chars().filter(|c| *c == PLACEHOLDER).count()
}
