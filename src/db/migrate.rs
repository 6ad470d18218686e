//! Versioned schema migrations, tracked through `PRAGMA user_version`.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, Result};

/// Schema version this build expects.
pub const SCHEMA_VERSION: i64 = 2;

fn user_version(conn: &Connection) -> Result<i64> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

fn set_user_version(conn: &Connection, v: i64) -> Result<()> {
    // PRAGMA does not accept bound parameters
    conn.execute_batch(&format!("PRAGMA user_version = {v};"))
}

/// Check if `table` has a column called `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// v1: key-value table holding one serialized blob per key.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        "#,
    )
}

/// v2: remember when each blob was last rewritten.
fn add_updated_at_column(conn: &Connection) -> Result<()> {
    if has_column(conn, "kv_store", "updated_at")? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        ALTER TABLE kv_store ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';
        UPDATE kv_store SET updated_at = datetime('now') WHERE updated_at = '';
        "#,
    )
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let current = user_version(conn)?;

    if current > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema v{current} is newer than supported v{SCHEMA_VERSION}"
        )));
    }

    if current < 1 {
        create_kv_table(conn)?;
        set_user_version(conn, 1)?;
        success("Created kv_store table.");
    }

    if current < 2 {
        add_updated_at_column(conn)?;
        set_user_version(conn, 2)?;
    }

    Ok(())
}
