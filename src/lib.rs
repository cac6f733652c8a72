pub mod options;
pub mod result;
pub mod runner;
#[cfg(feature = "sqlite")]
pub mod runner_sqlite;
pub mod scanner;
pub mod splitter;
pub mod statement;
pub mod stripper;

// Re-export types for convenience
pub use options::ScriptOptions;
pub use result::{Result, ScriptError, ScriptResult};
pub use runner::{StatementOutcome, StatementRunner, run_script, run_script_file};
#[cfg(feature = "sqlite")]
pub use runner_sqlite::{SqliteRunner, run_script_file_sqlite, run_script_sqlite};
pub use scanner::{RegionKind, Span, scan};
pub use splitter::{split, split_optional, split_with_delimiter, statements};
pub use statement::StatementKind;
pub use stripper::{remove_comments, remove_comments_optional};

// Re-export third-party types used in the public API to provide fallback for dependency conflicts
#[cfg(feature = "sqlite")]
pub use rusqlite::Connection as SqliteConnection;
