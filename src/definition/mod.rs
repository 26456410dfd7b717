//! Enum definitions: the immutable name ↔ code mapping behind an enum column.
//!
//! # Architecture
//!
//! - **Key**: [`EnumKey`], a validated identifier
//! - **Spec**: [`EnumSpec`] and [`IntoEnumSpec`], the accepted declaration forms
//! - **Definition**: [`EnumDefinition`], the validated ordered mapping
//!
//! # Examples
//!
//! ```
//! use lifeguard_enum::{EnumDefinition, EnumSpec};
//!
//! let conditions = EnumDefinition::from_spec(EnumSpec::sequence(["mint", "very_good"]))?;
//! assert_eq!(conditions.code("very_good"), Some(1));
//! assert_eq!(conditions.key(0).map(|k| k.as_str()), Some("mint"));
//! # Ok::<(), lifeguard_enum::EnumError>(())
//! ```

pub mod key;
#[doc(inline)]
pub use key::{is_identifier, EnumKey};

pub mod spec;
#[doc(inline)]
pub use spec::{EnumSpec, IntoEnumSpec};

use crate::error::EnumError;
use indexmap::IndexMap;
use serde::Serialize;

/// Ordered mapping from symbolic key to integer code
///
/// Codes are not required to be unique. When several keys share a code, the
/// reverse lookup resolves to the first of them in definition order.
///
/// Equality compares contents regardless of order, like a map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct EnumDefinition {
    values: IndexMap<EnumKey, i64>,
}

impl EnumDefinition {
    /// Validate a spec into a definition
    ///
    /// Sequence names get codes `0, 1, 2, …` by position. A name repeated in
    /// a sequence keeps its first position and takes the later code.
    ///
    /// # Errors
    ///
    /// Returns `EnumError::InvalidArgument` if any key is not an identifier.
    pub fn from_spec(spec: EnumSpec) -> Result<Self, EnumError> {
        let mut values = IndexMap::new();
        match spec {
            EnumSpec::Sequence(names) => {
                for (code, name) in (0_i64..).zip(names) {
                    values.insert(EnumKey::new(name)?, code);
                }
            }
            EnumSpec::Mapping(pairs) => {
                for (name, code) in pairs {
                    values.insert(EnumKey::new(name)?, code);
                }
            }
        }
        Ok(Self { values })
    }

    /// Code stored for `key`, if `key` is a member
    pub fn code(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    /// First key (in definition order) whose code is `code`
    pub fn key(&self, code: i64) -> Option<&EnumKey> {
        self.values
            .iter()
            .find_map(|(key, value)| (*value == code).then_some(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &EnumKey> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EnumKey, i64)> {
        self.values.iter().map(|(key, code)| (key, *code))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(name, code)` pairs as plain strings, in definition order
    pub fn to_pairs(&self) -> Vec<(String, i64)> {
        self.iter().map(|(key, code)| (key.to_string(), code)).collect()
    }
}
