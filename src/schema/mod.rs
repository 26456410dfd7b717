//! Storage schema capability.
//!
//! The host persistence layer answers two questions for enum registration:
//! which columns a table has (so the model can expose column accessors), and
//! whether a given name is a live storage column (so a column accessor is not
//! mistaken for an unrelated method). Both may need a backend round-trip and
//! may fail.

pub mod memory;
#[doc(inline)]
pub use memory::StaticSchema;

#[cfg(feature = "sqlite")]
pub mod sqlite;
#[cfg(feature = "sqlite")]
#[doc(inline)]
pub use sqlite::SqliteSchema;

use crate::error::SchemaError;

/// Result of asking the backend whether a column exists
#[derive(Debug)]
pub enum ColumnProbe {
    /// The table has this column
    Present,
    /// The table exists and has no such column
    Absent,
    /// The backend could not answer (missing table, connection failure, ...)
    Failed(SchemaError),
}

impl ColumnProbe {
    pub fn is_present(&self) -> bool {
        matches!(self, ColumnProbe::Present)
    }
}

/// Capability the host storage layer provides to model types
pub trait StorageSchema: Send + Sync + std::fmt::Debug {
    /// Column names of `table`, in table order
    ///
    /// # Errors
    ///
    /// Returns a `SchemaError` if the backend cannot describe the table.
    fn columns(&self, table: &str) -> Result<Vec<String>, SchemaError>;

    /// Check whether `column` is a live column of `table`
    ///
    /// The default implementation derives the answer from [`columns`](Self::columns).
    fn probe_column(&self, table: &str, column: &str) -> ColumnProbe {
        match self.columns(table) {
            Ok(columns) if columns.iter().any(|c| c == column) => ColumnProbe::Present,
            Ok(_) => ColumnProbe::Absent,
            Err(e) => ColumnProbe::Failed(e),
        }
    }
}
