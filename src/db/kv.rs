//! SQLite implementation of the key-value persistence primitive.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::KvBackend;
use chrono::Local;
use rusqlite::{OptionalExtension, TransactionBehavior, params};

pub struct SqliteBackend {
    pool: DbPool,
    path: String,
}

impl SqliteBackend {
    /// Open (or create) the database file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            path: path.to_string(),
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            path: ":memory:".to_string(),
        })
    }

    /// When the blob under `key` was last written (RFC 3339), if ever.
    pub fn updated_at(&self, key: &str) -> AppResult<Option<String>> {
        let v = self
            .pool
            .conn
            .query_row(
                "SELECT updated_at FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(v)
    }

    /// `PRAGMA integrity_check` result, "ok" when healthy.
    pub fn integrity_check(&self) -> AppResult<String> {
        let s = self
            .pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
        Ok(s)
    }
}

impl KvBackend for SqliteBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let v = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(v)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();

        // IMMEDIATE takes the write lock up front: concurrent writers queue on it
        self.pool.with_conn(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            tx.execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )?;

            tx.commit()
        })?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.clone()
    }
}
