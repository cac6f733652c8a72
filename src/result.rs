use serde::Serialize;
use thiserror::Error;

/// Main error type for script loading and execution.
///
/// Splitting and comment stripping never fail; these errors only come from
/// configuration and from running statements against a database.
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Invalid statement delimiter {delimiter:?}: {reason}")]
    InvalidDelimiter { delimiter: char, reason: String },
    #[error("Execution error: {0}")]
    Execution(String),
    #[error("Statement {index} failed: {source}\n{sql}")]
    StatementFailed {
        index: usize,
        sql: String,
        #[source]
        source: Box<ScriptError>,
    },
}

impl ScriptError {
    pub fn new_invalid_delimiter(delimiter: char, reason: impl Into<String>) -> Self {
        ScriptError::InvalidDelimiter {
            delimiter,
            reason: reason.into(),
        }
    }

    pub fn new_execution(message: impl Into<String>) -> Self {
        ScriptError::Execution(message.into())
    }

    pub fn new_statement_failed(index: usize, sql: impl Into<String>, source: ScriptError) -> Self {
        ScriptError::StatementFailed {
            index,
            sql: sql.into(),
            source: Box::new(source),
        }
    }
}

/// Type alias for Results using ScriptError
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Counters gathered while running a script, one statement at a time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptResult {
    /// Number of statements sent to the database
    pub statements_executed: usize,
    /// Rows returned by queries
    pub lines_read: u64,
    /// Rows inserted
    pub lines_output: u64,
    pub lines_updated: u64,
    pub lines_deleted: u64,
    /// Whether any statement created, altered or dropped a schema object
    pub schema_changed: bool,
    /// The SQL actually executed, in order
    pub sql_statements: Vec<String>,
}
