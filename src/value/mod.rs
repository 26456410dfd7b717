//! Conversions between enum codes, symbolic keys and `sea_query::Value`.
//!
//! Enum columns are stored as integers. Any signed or unsigned integer variant
//! read back from a record is accepted as a code; everything else (including
//! every `None` variant) counts as "no code".

use sea_query::Value;

/// Wrap an enum code for storage
#[must_use]
pub fn code_value(code: i64) -> Value {
    Value::BigInt(Some(code))
}

/// The typed null written when a symbolic value has no code
#[must_use]
pub fn null_code() -> Value {
    Value::BigInt(None)
}

/// Extract an integer code from a stored value
///
/// Returns `None` for null values, non-integer variants, and unsigned values
/// that do not fit in an `i64`.
#[must_use]
pub fn stored_code(value: &Value) -> Option<i64> {
    match value {
        Value::TinyInt(Some(i)) => Some(i64::from(*i)),
        Value::SmallInt(Some(i)) => Some(i64::from(*i)),
        Value::Int(Some(i)) => Some(i64::from(*i)),
        Value::BigInt(Some(i)) => Some(*i),
        Value::TinyUnsigned(Some(u)) => Some(i64::from(*u)),
        Value::SmallUnsigned(Some(u)) => Some(i64::from(*u)),
        Value::Unsigned(Some(u)) => Some(i64::from(*u)),
        Value::BigUnsigned(Some(u)) => i64::try_from(*u).ok(),
        _ => None,
    }
}

/// Coerce an incoming setter argument to its symbolic-key form
///
/// Strings and single characters are accepted; any other value has no
/// symbolic form.
#[must_use]
pub fn symbolic_key(value: &Value) -> Option<String> {
    match value {
        Value::String(Some(s)) => Some(s.clone()),
        Value::Char(Some(c)) => Some(c.to_string()),
        _ => None,
    }
}

/// Wrap a getter result for dynamic dispatch
#[must_use]
pub fn symbol_value(key: Option<&str>) -> Value {
    Value::String(key.map(str::to_string))
}
