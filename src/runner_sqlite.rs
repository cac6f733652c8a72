use crate::{
    options::ScriptOptions,
    result::{Result, ScriptResult},
    runner::{StatementOutcome, StatementRunner, run_script},
};
use rusqlite::Connection;
use std::fs;

/// Statement runner backed by a SQLite connection (or a transaction, via deref)
pub struct SqliteRunner<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteRunner<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        SqliteRunner { conn }
    }
}

impl StatementRunner for SqliteRunner<'_> {
    fn run(&mut self, sql: &str) -> Result<StatementOutcome> {
        let mut stmt = self.conn.prepare(sql)?;

        if stmt.column_count() == 0 {
            let changed = stmt.raw_execute()?;
            return Ok(StatementOutcome::changed(changed as u64));
        }

        // Checked before stepping: RETURNING makes a statement both read and write
        let writes = !stmt.readonly();
        let mut rows = stmt.raw_query();
        let mut read = 0;
        while rows.next()?.is_some() {
            read += 1;
        }
        drop(rows);

        let changed = if writes { self.conn.changes() as u64 } else { 0 };
        Ok(StatementOutcome {
            rows_read: read,
            rows_changed: changed,
        })
    }
}

/// Run a script with SQLite backend
/// All statements run inside one transaction, committed only if every statement succeeds
pub fn run_script_sqlite(
    conn: &mut Connection,
    script: &str,
    options: &ScriptOptions,
) -> Result<ScriptResult> {
    let tx = conn.transaction()?;

    let result = run_script(&mut SqliteRunner::new(&tx), script, options)?;

    // Dropping an uncommitted transaction rolls it back
    tx.commit()?;
    Ok(result)
}

/// Read a SQL script from a file and run it with [`run_script_sqlite`]
pub fn run_script_file_sqlite(
    conn: &mut Connection,
    path: &str,
    options: &ScriptOptions,
) -> anyhow::Result<ScriptResult> {
    let script = fs::read_to_string(path)?;
    Ok(run_script_sqlite(conn, &script, options)?)
}
