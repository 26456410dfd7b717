//! Method tables attached to a model type.
//!
//! Instead of opening the model type and defining methods on it, every
//! callable name lives in an explicit table. Enum registration checks these
//! tables for collisions and then adds its own entries.

use super::record::Record;
use crate::definition::EnumKey;
use sea_query::Value;
use std::fmt;
use std::sync::Arc;

/// Host-defined instance method body
pub type HostFn = Arc<dyn Fn(&mut dyn Record, &[Value]) -> Value + Send + Sync>;

/// Instance method entry
#[derive(Clone)]
pub enum Method {
    /// Plain column reader defined by the host for each table column
    ColumnGetter { column: String },
    /// Plain column writer (`column=`)
    ColumnSetter { column: String },
    /// Generated symbolic reader for an enum column
    EnumGetter { column: String },
    /// Generated symbolic writer (`column=`) for an enum column
    EnumSetter { column: String },
    /// Generated membership predicate (`key?`)
    EnumPredicate { column: String, key: EnumKey },
    /// Arbitrary method supplied by the host
    Host(HostFn),
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::ColumnGetter { column } => write!(f, "ColumnGetter({column})"),
            Method::ColumnSetter { column } => write!(f, "ColumnSetter({column})"),
            Method::EnumGetter { column } => write!(f, "EnumGetter({column})"),
            Method::EnumSetter { column } => write!(f, "EnumSetter({column})"),
            Method::EnumPredicate { column, key } => write!(f, "EnumPredicate({column}, {key})"),
            Method::Host(_) => write!(f, "Host(..)"),
        }
    }
}

/// Class (type-level) method entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMethod {
    /// Generated reflection accessor returning the enum mapping of `column`
    EnumMapping { column: String },
    /// Method the host already defines under this name (public or private)
    Host,
}
