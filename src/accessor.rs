//! Typed handle onto a registered enum column.
//!
//! Reads and writes never fail: an unknown symbolic value stores null, and a
//! stored code that no key maps to reads back as `None`.

use crate::definition::{EnumDefinition, EnumKey};
use crate::model::Record;
use crate::value::{code_value, null_code, stored_code, symbolic_key};
use sea_query::Value;
use std::sync::Arc;

/// Reverse lookup of the code stored in `column`
pub(crate) fn read_key<'d>(
    definition: &'d EnumDefinition,
    record: &dyn Record,
    column: &str,
) -> Option<&'d EnumKey> {
    let code = record.attribute(column).as_ref().and_then(stored_code)?;
    definition.key(code)
}

/// Store the code of `key` in `column`, or null when `key` is unknown
pub(crate) fn write_key(
    definition: &EnumDefinition,
    record: &mut dyn Record,
    column: &str,
    key: Option<&str>,
) -> Value {
    let value = key
        .and_then(|k| definition.code(k))
        .map_or_else(null_code, code_value);
    record.set_attribute(column, value.clone());
    value
}

/// Accessor returned by a successful enum registration
#[derive(Debug, Clone)]
pub struct EnumAccessor {
    column: String,
    mapping_name: String,
    definition: Arc<EnumDefinition>,
}

impl EnumAccessor {
    pub(crate) fn new(column: String, mapping_name: String, definition: Arc<EnumDefinition>) -> Self {
        Self {
            column,
            mapping_name,
            definition,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    /// Name of the generated class accessor (`condition` → `conditions`)
    pub fn mapping_name(&self) -> &str {
        &self.mapping_name
    }

    pub fn definition(&self) -> &EnumDefinition {
        &self.definition
    }

    /// Symbolic value of the column, if its stored code is known
    pub fn get(&self, record: &dyn Record) -> Option<&EnumKey> {
        read_key(&self.definition, record, &self.column)
    }

    /// Raw integer code currently stored
    pub fn code(&self, record: &dyn Record) -> Option<i64> {
        record.attribute(&self.column).as_ref().and_then(stored_code)
    }

    /// Store the code for `key`; returns the stored code (`None` if `key` is
    /// not a member)
    pub fn set(&self, record: &mut dyn Record, key: impl AsRef<str>) -> Option<i64> {
        let stored = write_key(&self.definition, record, &self.column, Some(key.as_ref()));
        stored_code(&stored)
    }

    /// Store a dynamically-typed value, coercing strings to keys
    ///
    /// Values with no symbolic form store null.
    pub fn set_value(&self, record: &mut dyn Record, value: &Value) -> Option<i64> {
        let key = symbolic_key(value);
        let stored = write_key(&self.definition, record, &self.column, key.as_deref());
        stored_code(&stored)
    }

    /// Membership predicate: true iff the column currently reads as `key`
    pub fn is(&self, record: &dyn Record, key: &str) -> bool {
        self.get(record).is_some_and(|current| current == key)
    }
}
