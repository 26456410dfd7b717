//! Source forms accepted when declaring an enum column.
//!
//! An enum is declared either as an ordered list of names (codes assigned by
//! position) or as an explicit name → code mapping. Typed Rust inputs convert
//! infallibly; dynamic input (`serde_json::Value`, e.g. from a schema file) is
//! type-checked and rejected with `EnumError::InvalidArgument` when its shape
//! is wrong.

use crate::error::EnumError;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// An enum declaration before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumSpec {
    /// Names in order; the k-th name gets code `k`
    Sequence(Vec<String>),
    /// Explicit name → code pairs, in declaration order
    Mapping(Vec<(String, i64)>),
}

impl EnumSpec {
    /// Build a sequence spec from names
    pub fn sequence<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumSpec::Sequence(names.into_iter().map(Into::into).collect())
    }

    /// Build a mapping spec from `(name, code)` pairs
    pub fn mapping<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        EnumSpec::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Type-check a dynamic value
    ///
    /// Arrays must contain only strings. Objects must map to integers
    /// (floats, strings and out-of-range numbers are rejected). Anything else
    /// is not an enum declaration.
    ///
    /// # Errors
    ///
    /// Returns `EnumError::InvalidArgument` describing the first offending
    /// element.
    pub fn from_json(value: &JsonValue) -> Result<Self, EnumError> {
        match value {
            JsonValue::Array(items) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        JsonValue::String(name) => names.push(name.clone()),
                        other => {
                            return Err(EnumError::InvalidArgument(format!(
                                "enum name should be a string, {other} provided which is {}",
                                json_kind(other)
                            )))
                        }
                    }
                }
                Ok(EnumSpec::Sequence(names))
            }
            JsonValue::Object(entries) => {
                let mut pairs = Vec::with_capacity(entries.len());
                for (key, val) in entries {
                    let code = val.as_i64().ok_or_else(|| {
                        EnumError::InvalidArgument(format!(
                            "value should be an integer, {val} provided which is {}",
                            json_kind(val)
                        ))
                    })?;
                    pairs.push((key.clone(), code));
                }
                Ok(EnumSpec::Mapping(pairs))
            }
            other => Err(EnumError::InvalidArgument(format!(
                "enum expects a list of names or a map like {{ \"name\": integer }}, got {}",
                json_kind(other)
            ))),
        }
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(n) if n.is_i64() => "an integer",
        JsonValue::Number(n) if n.is_u64() => "an out-of-range integer",
        JsonValue::Number(_) => "a float",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Conversion into an [`EnumSpec`], fallible for dynamic input
pub trait IntoEnumSpec {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError>;
}

impl IntoEnumSpec for EnumSpec {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        Ok(self)
    }
}

impl IntoEnumSpec for &JsonValue {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        EnumSpec::from_json(self)
    }
}

impl IntoEnumSpec for JsonValue {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        EnumSpec::from_json(&self)
    }
}

impl<const N: usize> IntoEnumSpec for [&str; N] {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        Ok(EnumSpec::sequence(self))
    }
}

impl IntoEnumSpec for &[&str] {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        Ok(EnumSpec::sequence(self.iter().copied()))
    }
}

impl IntoEnumSpec for Vec<&str> {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        Ok(EnumSpec::sequence(self))
    }
}

impl IntoEnumSpec for Vec<String> {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        Ok(EnumSpec::Sequence(self))
    }
}

impl<const N: usize> IntoEnumSpec for [(&str, i64); N] {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        Ok(EnumSpec::mapping(self))
    }
}

impl IntoEnumSpec for Vec<(&str, i64)> {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        Ok(EnumSpec::mapping(self))
    }
}

impl IntoEnumSpec for Vec<(String, i64)> {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        Ok(EnumSpec::Mapping(self))
    }
}

impl IntoEnumSpec for IndexMap<String, i64> {
    fn into_enum_spec(self) -> Result<EnumSpec, EnumError> {
        Ok(EnumSpec::Mapping(self.into_iter().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_becomes_sequence() {
        let spec = EnumSpec::from_json(&json!(["mint", "very_good"])).unwrap();
        assert_eq!(spec, EnumSpec::sequence(["mint", "very_good"]));
    }

    #[test]
    fn test_object_becomes_mapping_in_order() {
        let spec = EnumSpec::from_json(&json!({ "first": 0, "second": 1, "rare": 2, "other": 3 }))
            .unwrap();
        assert_eq!(
            spec,
            EnumSpec::mapping([("first", 0), ("second", 1), ("rare", 2), ("other", 3)])
        );
    }

    #[test]
    fn test_scalar_is_rejected() {
        let err = EnumSpec::from_json(&json!("whatever")).unwrap_err();
        assert!(matches!(err, EnumError::InvalidArgument(_)));
        assert!(err.to_string().contains("got a string"));

        assert!(EnumSpec::from_json(&json!(42)).is_err());
        assert!(EnumSpec::from_json(&JsonValue::Null).is_err());
    }

    #[test]
    fn test_mapping_values_must_be_integers() {
        let err = EnumSpec::from_json(&json!({ "first": "0" })).unwrap_err();
        assert!(err.to_string().contains("value should be an integer"));

        assert!(EnumSpec::from_json(&json!({ "first": 1.5 })).is_err());
        assert!(EnumSpec::from_json(&json!({ "first": u64::MAX })).is_err());
        assert!(EnumSpec::from_json(&json!({ "first": -1 })).is_ok());
    }

    #[test]
    fn test_sequence_elements_must_be_strings() {
        let err = EnumSpec::from_json(&json!(["mint", 1])).unwrap_err();
        assert!(err.to_string().contains("enum name should be a string"));
    }
}
