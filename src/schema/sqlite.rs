//! SQLite-backed schema probe.
//!
//! Columns are read from a zero-row `SELECT *`, so a missing table surfaces
//! as a backend error rather than an empty column list.

use super::StorageSchema;
use crate::error::SchemaError;
use rusqlite::Connection;
use std::sync::Mutex;

/// Schema capability over a live SQLite connection
#[derive(Debug)]
pub struct SqliteSchema {
    conn: Mutex<Connection>,
}

impl SqliteSchema {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Open a private in-memory database
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Sqlite` if SQLite cannot open the database.
    pub fn open_in_memory() -> Result<Self, SchemaError> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    /// Run DDL (or any batch of statements) against the connection
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Sqlite` if any statement fails.
    pub fn execute_batch(&self, sql: &str) -> Result<(), SchemaError> {
        let conn = self.lock()?;
        conn.execute_batch(sql)?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, SchemaError> {
        self.conn
            .lock()
            .map_err(|e| SchemaError::Backend(format!("Failed to lock SQLite connection: {e}")))
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

impl StorageSchema for SqliteSchema {
    fn columns(&self, table: &str) -> Result<Vec<String>, SchemaError> {
        let conn = self.lock()?;
        let sql = format!("SELECT * FROM {} LIMIT 0", quote_identifier(table));
        let stmt = conn.prepare(&sql)?;
        let columns = stmt.column_names().into_iter().map(str::to_string).collect();
        Ok(columns)
    }
}
