//! # Lifeguard Enum
//!
//! Integer-backed enum columns for Lifeguard model types.
//!
//! A model declares that an integer column is exposed symbolically; the
//! binder generates a class accessor returning the mapping, an instance
//! getter/setter pair translating between names and codes, and a `name?`
//! predicate per member. Generated names are checked against the model's
//! existing methods before anything is installed.
//!
//! ```
//! use lifeguard_enum::{ModelType, Record, Row};
//! use lifeguard_enum::schema::StaticSchema;
//! use sea_query::Value;
//! use std::sync::Arc;
//!
//! let schema = Arc::new(StaticSchema::new().table("items", ["id", "condition", "edition"]));
//! let mut item = ModelType::with_table("Item", "items", schema)?;
//! let condition = item.register_enum("condition", ["mint", "very_good", "good", "poor"])?;
//! item.register_enum("edition", [("first", 0_i64), ("second", 1), ("rare", 2), ("other", 3)])?;
//!
//! let mut row = Row::new();
//! condition.set(&mut row, "mint");
//! assert_eq!(row.attribute("condition"), Some(Value::BigInt(Some(0))));
//! assert_eq!(item.send(&mut row, "poor?", &[])?, Value::Bool(Some(false)));
//! assert_eq!(item.class_mapping("editions").map(|e| e.code("rare")), Some(Some(2)));
//! # Ok::<(), lifeguard_enum::EnumError>(())
//! ```

pub mod accessor;
pub mod binder;
pub mod config;
pub mod definition;
pub mod error;
pub mod inflection;
pub mod model;
pub mod schema;
pub mod value;

pub use accessor::EnumAccessor;
pub use binder::EnumColumnBinder;
pub use config::{ConflictCheck, EnumConfig};
pub use definition::{EnumDefinition, EnumKey, EnumSpec, IntoEnumSpec};
pub use error::{ConflictKind, EnumError, SchemaError};
pub use model::{ClassMethod, Method, ModelType, Record, Row};
pub use schema::{ColumnProbe, StaticSchema, StorageSchema};
#[cfg(feature = "sqlite")]
pub use schema::SqliteSchema;
