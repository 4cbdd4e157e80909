//! Ordered map type for decoded objects.
//!
//! This module provides [`PackMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object fields. Packed payloads encode
//! object entries as an ordered key/value token sequence, and decoding
//! preserves that encounter order.
//!
//! ## Why IndexMap?
//!
//! `PackMap` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Field order fidelity**: entries come back in the order the payload
//!   listed them
//! - **Deterministic iteration**: easier testing and debugging with
//!   predictable output
//!
//! ## Examples
//!
//! ```rust
//! use jsonpack::{PackMap, Value};
//!
//! let mut map = PackMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to decoded values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order,
/// matching the order object entries appear in the packed payload.
///
/// # Examples
///
/// ```rust
/// use jsonpack::{PackMap, Value};
///
/// let mut map = PackMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PackMap(IndexMap<String, crate::Value>);

impl PackMap {
    /// Creates an empty `PackMap`.
    #[must_use]
    pub fn new() -> Self {
        PackMap(IndexMap::new())
    }

    /// Creates an empty `PackMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PackMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonpack::{PackMap, Value};
    ///
    /// let mut map = PackMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl Default for PackMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, crate::Value>> for PackMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        PackMap(map.into_iter().collect())
    }
}

impl From<PackMap> for HashMap<String, crate::Value> {
    fn from(map: PackMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for PackMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Value)> for PackMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        PackMap(IndexMap::from_iter(iter))
    }
}
