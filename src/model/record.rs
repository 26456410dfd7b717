//! Attribute access capability for model instances.

use indexmap::IndexMap;
use sea_query::Value;

/// Raw attribute storage of a model instance
///
/// This is the only view generated enum accessors have of an instance: they
/// read and write the integer column through it.
///
/// # Example
///
/// ```
/// use lifeguard_enum::{Record, Row};
/// use sea_query::Value;
///
/// let mut row = Row::new();
/// row.set_attribute("condition", Value::BigInt(Some(1)));
/// assert_eq!(row.attribute("condition"), Some(Value::BigInt(Some(1))));
/// assert_eq!(row.attribute("edition"), None);
/// ```
pub trait Record {
    /// Current value of `column`, or `None` if the attribute was never set
    fn attribute(&self, column: &str) -> Option<Value>;

    /// Overwrite `column`
    fn set_attribute(&mut self, column: &str, value: Value);
}

/// In-memory record with insertion-ordered attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: IndexMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow an attribute without cloning it
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Record for Row {
    fn attribute(&self, column: &str) -> Option<Value> {
        self.values.get(column).cloned()
    }

    fn set_attribute(&mut self, column: &str, value: Value) {
        self.values.insert(column.to_string(), value);
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
