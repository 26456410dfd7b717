//! Error types for enum registration and dispatch.
//!
//! Registration fails with [`EnumError::InvalidArgument`] for malformed enum
//! specifications and [`EnumError::Conflict`] when a generated method would
//! shadow an existing one. The generated accessors themselves never fail.

use std::fmt;

/// Which method namespace a conflicting name lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// Class-level (static) accessor, e.g. `conditions`
    Class,
    /// Instance accessor, e.g. `condition` or `condition=`
    Instance,
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::Class => write!(f, "class"),
            ConflictKind::Instance => write!(f, "instance"),
        }
    }
}

/// Error type for enum column registration and method dispatch
#[derive(Debug, thiserror::Error)]
pub enum EnumError {
    /// Malformed enum specification
    #[error("{0}")]
    InvalidArgument(String),

    /// A generated method name is already taken on the model
    #[error(
        "You tried to define an enum named \"{enum_name}\" on the model \"{model}\", but \
         this will generate a {kind} method \"{method}\", which is already defined."
    )]
    Conflict {
        model: String,
        enum_name: String,
        kind: ConflictKind,
        method: String,
    },

    /// Dispatch to a method the model does not define
    #[error("undefined method `{method}` for model \"{model}\"")]
    NoMethod { model: String, method: String },

    /// Storage schema backend failure that was not masked
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Error raised by a [`StorageSchema`](crate::schema::StorageSchema) backend
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Generic backend failure (lock poisoning, unknown table, ...)
    #[error("schema backend error: {0}")]
    Backend(String),

    /// SQLite failure while inspecting a table
    #[error("SQLite error: {0}")]
    Sqlite(String),
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for SchemaError {
    fn from(err: rusqlite::Error) -> Self {
        SchemaError::Sqlite(err.to_string())
    }
}
