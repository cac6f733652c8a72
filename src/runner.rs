use crate::{
    options::ScriptOptions,
    result::{Result, ScriptError, ScriptResult},
    splitter::statements,
    statement::StatementKind,
    stripper::remove_comments,
};
use std::{borrow::Cow, fs};

/// What the backend reports after running one statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatementOutcome {
    /// Rows the statement returned
    pub rows_read: u64,
    /// Rows the statement inserted, updated or deleted
    pub rows_changed: u64,
}

impl StatementOutcome {
    pub fn read(rows: u64) -> Self {
        StatementOutcome {
            rows_read: rows,
            rows_changed: 0,
        }
    }

    pub fn changed(rows: u64) -> Self {
        StatementOutcome {
            rows_read: 0,
            rows_changed: rows,
        }
    }
}

/// Trait for executing single, already split SQL statements against a database backend
pub trait StatementRunner {
    /// Run one statement. The backend decides whether it returns rows; any
    /// rows it returns are read to the end and counted.
    fn run(&mut self, sql: &str) -> Result<StatementOutcome>;
}

/// Prepare one split statement for execution, or `None` if nothing is left to run
fn prepare_statement<'a>(raw: &'a str, options: &ScriptOptions) -> Option<Cow<'a, str>> {
    let sql: Cow<'a, str> = if options.strip_comments {
        Cow::Owned(remove_comments(raw))
    } else {
        Cow::Borrowed(raw)
    };

    if sql.trim().is_empty() {
        return None;
    }

    if options.trim {
        Some(Cow::Owned(sql.trim().to_string()))
    } else {
        Some(sql)
    }
}

/// Split `script` and run every statement, in order, through `runner`.
///
/// Statements that are empty once comments are removed are skipped. With
/// [`ScriptOptions::single_statement`] the script is not split and goes to
/// the runner as one statement. The first failing statement aborts the run
/// with [`ScriptError::StatementFailed`]; transaction handling is left to the
/// runner's owner.
pub fn run_script<R: StatementRunner>(
    runner: &mut R,
    script: &str,
    options: &ScriptOptions,
) -> Result<ScriptResult> {
    options.validate()?;

    let mut result = ScriptResult::default();

    if options.single_statement {
        if let Some(sql) = prepare_statement(script, options) {
            run_statement(runner, sql, &mut result)?;
        }
    } else {
        for raw in statements(script, options.delimiter) {
            let Some(sql) = prepare_statement(raw, options) else {
                tracing::debug!("skipping statement without executable content");
                continue;
            };
            run_statement(runner, sql, &mut result)?;
        }
    }

    tracing::info!(
        statements = result.statements_executed,
        read = result.lines_read,
        inserted = result.lines_output,
        updated = result.lines_updated,
        deleted = result.lines_deleted,
        "script finished"
    );

    Ok(result)
}

/// Run one prepared statement and add its counts to `result`
fn run_statement<R: StatementRunner>(
    runner: &mut R,
    sql: Cow<'_, str>,
    result: &mut ScriptResult,
) -> Result<()> {
    let index = result.statements_executed + 1;
    let kind = StatementKind::classify(&sql);
    tracing::debug!(index, ?kind, "launching statement");
    tracing::trace!(index, sql = %sql);

    let outcome = runner
        .run(&sql)
        .map_err(|err| ScriptError::new_statement_failed(index, &*sql, err))?;

    result.lines_read += outcome.rows_read;
    match kind {
        StatementKind::Insert => result.lines_output += outcome.rows_changed,
        StatementKind::Update => result.lines_updated += outcome.rows_changed,
        StatementKind::Delete => result.lines_deleted += outcome.rows_changed,
        StatementKind::SchemaChange => result.schema_changed = true,
        StatementKind::Query | StatementKind::Other => {}
    }

    result.statements_executed = index;
    result.sql_statements.push(sql.into_owned());
    Ok(())
}

/// Read a SQL script from a file and run it with [`run_script`]
pub fn run_script_file<R: StatementRunner>(
    runner: &mut R,
    path: &str,
    options: &ScriptOptions,
) -> anyhow::Result<ScriptResult> {
    let script = fs::read_to_string(path)?;
    Ok(run_script(runner, &script, options)?)
}
