//! Ordered map of field names to field values.
//!
//! [`FieldMap`] is the intermediate representation shared by the encoder and
//! the decoder. It wraps an [`IndexMap`] so the structured form lists keys in
//! the order the fields were declared, which keeps encoder output
//! deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use invoke_string::FieldMap;
//!
//! let mut map = FieldMap::new();
//! map.insert("Path".to_string(), "a".to_string());
//! map.insert("Name".to_string(), "b".to_string());
//!
//! assert_eq!(map.to_invoke_string(), r#"{"Path":"a","Name":"b"}"#);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An insertion-ordered map of field names to string values.
///
/// Serializes as a JSON object with string values, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(IndexMap<String, String>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Creates an empty `FieldMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field value.
    ///
    /// Re-inserting an existing name replaces its value but keeps its
    /// original position. The old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invoke_string::FieldMap;
    ///
    /// let mut map = FieldMap::new();
    /// assert!(map.insert("Path".to_string(), "a".to_string()).is_none());
    /// assert_eq!(map.insert("Path".to_string(), "b".to_string()), Some("a".to_string()));
    /// ```
    pub fn insert(&mut self, name: String, value: String) -> Option<String> {
        self.0.insert(name, value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes a field, preserving the order of the remaining fields.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the single entry when the map holds exactly one field.
    #[must_use]
    pub fn single(&self) -> Option<(&str, &str)> {
        if self.0.len() == 1 {
            self.0.first().map(|(k, v)| (k.as_str(), v.as_str()))
        } else {
            None
        }
    }

    /// Returns an iterator over the field names, in insertion order.
    pub fn names(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over name-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Encodes this map as an invoke string.
    ///
    /// See [`crate::ser::encode_field_map`] for the form selection rules.
    #[must_use]
    pub fn to_invoke_string(&self) -> String {
        crate::ser::encode_field_map(self)
    }
}

impl From<HashMap<String, String>> for FieldMap {
    fn from(map: HashMap<String, String>) -> Self {
        FieldMap(map.into_iter().collect())
    }
}

impl From<FieldMap> for HashMap<String, String> {
    fn from(map: FieldMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        FieldMap(IndexMap::from_iter(iter))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
