//! Column projection descriptors for `SELECT`.

/// What a `SELECT` returns.
///
/// Expressions are trusted raw SQL: no quoting or validation is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Projection {
    /// `*`
    #[default]
    Wildcard,
    /// A single raw expression, e.g. `"id, name"` or `"count(*)"`
    Raw(String),
    /// Raw expressions joined with `, `
    List(Vec<String>),
    /// `expression → alias` pairs; `expr AS alias` unless both are equal
    Aliased(Vec<(String, String)>),
}

impl Projection {
    /// Build an aliased projection from `(expression, alias)` pairs.
    pub fn aliased<E, A>(pairs: impl IntoIterator<Item = (E, A)>) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        Self::Aliased(
            pairs
                .into_iter()
                .map(|(e, a)| (e.into(), a.into()))
                .collect(),
        )
    }

    /// Build a list projection.
    pub fn list<S: Into<String>>(exprs: impl IntoIterator<Item = S>) -> Self {
        Self::List(exprs.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for Projection {
    fn from(s: &str) -> Self {
        if s == "*" {
            Self::Wildcard
        } else {
            Self::Raw(s.to_string())
        }
    }
}

impl From<String> for Projection {
    fn from(s: String) -> Self {
        if s == "*" {
            Self::Wildcard
        } else {
            Self::Raw(s)
        }
    }
}

impl From<Vec<&str>> for Projection {
    fn from(exprs: Vec<&str>) -> Self {
        Self::list(exprs)
    }
}

impl From<Vec<String>> for Projection {
    fn from(exprs: Vec<String>) -> Self {
        Self::List(exprs)
    }
}

/// Compile a projection into a SQL column list.
pub fn compile(projection: &Projection) -> String {
    match projection {
        Projection::Wildcard => "*".to_string(),
        Projection::Raw(expr) => expr.clone(),
        Projection::List(exprs) => exprs.join(", "),
        Projection::Aliased(pairs) => {
            let mut sql = String::new();
            for (i, (expr, alias)) in pairs.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(expr);
                if expr != alias {
                    sql.push_str(" AS ");
                    sql.push_str(alias);
                }
            }
            sql
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_and_raw_are_verbatim() {
        assert_eq!(compile(&Projection::Wildcard), "*");
        assert_eq!(compile(&"*".into()), "*");
        assert_eq!(compile(&"id, name".into()), "id, name");
    }

    #[test]
    fn aliased_pairs_skip_identity_alias() {
        let p = Projection::aliased([("id", "id"), ("count(id)", "count")]);
        assert_eq!(compile(&p), "id, count(id) AS count");
    }

    #[test]
    fn list_entries_are_not_rewritten() {
        let p: Projection = vec!["id", "count(id) as count"].into();
        assert_eq!(compile(&p), "id, count(id) as count");
    }

    #[test]
    fn empty_list_is_empty_text() {
        assert_eq!(compile(&Projection::List(Vec::new())), "");
    }
}
