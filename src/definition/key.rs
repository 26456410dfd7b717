//! Validated symbolic enum keys.

use crate::error::EnumError;
use regex::Regex;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::sync::LazyLock;

#[allow(clippy::expect_used)] // Literal pattern
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern is valid"));

/// Check whether `name` can be used as a generated method name
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}

/// A symbolic enum member name such as `mint` or `very_good`
///
/// Keys are always valid identifiers, so `<key>?` is a usable predicate name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EnumKey(String);

impl EnumKey {
    /// Validate and wrap a key
    ///
    /// # Errors
    ///
    /// Returns `EnumError::InvalidArgument` if `name` is not an identifier.
    pub fn new(name: impl Into<String>) -> Result<Self, EnumError> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(EnumError::InvalidArgument(format!(
                "enum key should be an identifier, {name:?} provided"
            )));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the generated membership predicate (`mint` → `mint?`)
    pub fn predicate_name(&self) -> String {
        format!("{}?", self.0)
    }
}

impl fmt::Display for EnumKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EnumKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EnumKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for EnumKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EnumKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl TryFrom<&str> for EnumKey {
    type Error = EnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for EnumKey {
    type Error = EnumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
