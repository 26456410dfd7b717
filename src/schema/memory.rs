//! In-memory schema for hosts that know their tables up front.

use super::StorageSchema;
use crate::error::SchemaError;
use indexmap::IndexMap;

/// Static table → columns catalogue
///
/// # Example
///
/// ```
/// use lifeguard_enum::schema::{StaticSchema, StorageSchema};
///
/// let schema = StaticSchema::new().table("items", ["id", "condition"]);
/// assert!(schema.probe_column("items", "condition").is_present());
/// assert!(!schema.probe_column("items", "edition").is_present());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    tables: IndexMap<String, Vec<String>>,
}

impl StaticSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a table definition
    #[must_use]
    pub fn table<I, S>(mut self, name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .insert(name.into(), columns.into_iter().map(Into::into).collect());
        self
    }
}

impl StorageSchema for StaticSchema {
    fn columns(&self, table: &str) -> Result<Vec<String>, SchemaError> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| SchemaError::Backend(format!("no such table: {table}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnProbe;

    #[test]
    fn test_unknown_table_fails_probe() {
        let schema = StaticSchema::new().table("items", ["id"]);
        assert!(matches!(
            schema.probe_column("widgets", "id"),
            ColumnProbe::Failed(SchemaError::Backend(_))
        ));
        assert!(schema.columns("widgets").is_err());
    }

    #[test]
    fn test_columns_keep_table_order() {
        let schema = StaticSchema::new().table("items", ["id", "name", "condition"]);
        assert_eq!(schema.columns("items").unwrap(), vec!["id", "name", "condition"]);
        assert!(matches!(schema.probe_column("items", "state"), ColumnProbe::Absent));
    }
}
