use tracing::Level;

/// Execution settings carried by a [`Client`](crate::Client).
///
/// Only logging is configurable: liteorm has no timeouts, retries or pooling.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Level of the event emitted before each statement runs.
    pub log_level: Level,
    /// Truncate logged SQL (in bytes, on a char boundary). `None` logs it whole.
    ///
    /// Errors always carry the full SQL regardless of this setting.
    pub max_sql_length: Option<usize>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with defaults (`DEBUG`, 200 bytes of SQL).
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the statement event level.
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Set maximum SQL length to log.
    pub fn with_max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    pub(crate) fn truncate_sql<'a>(&self, sql: &'a str) -> std::borrow::Cow<'a, str> {
        match self.max_sql_length {
            Some(max) if sql.len() > max => {
                format!("{}...", truncate_sql_bytes(sql, max)).into()
            }
            _ => sql.into(),
        }
    }
}

fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
