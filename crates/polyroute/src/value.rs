// File: polyroute/src/value.rs
// Purpose: insertion-ordered string maps for defaults, constraints, tokens
// and URL substitutions

use serde::{Deserialize, Serialize};

use crate::section::LocalizedSectionList;

/// Default values and constraint patterns attached to an action.
pub type RouteValueMap = OrderedMap<String>;

/// Named tokens: token key to its per-locale translations.
pub type TokenMap = OrderedMap<LocalizedSectionList>;

/// A `String -> V` map that preserves insertion order.
///
/// Route maps are small (a handful of entries), so this is a plain `Vec` of
/// pairs with linear lookup. Order matters: URL substitution iterates the map
/// in insertion order, and the first-inserted key wins when the same literal
/// placeholder text appears twice.
///
/// Re-inserting an existing key replaces the value but keeps the original
/// position.
///
/// # Examples
///
/// ```rust
/// use polyroute::RouteValueMap;
///
/// let mut values = RouteValueMap::new();
/// values.insert("page", "1");
/// values.insert("sort", "asc");
/// values.insert("page", "2");
///
/// assert_eq!(values.get("page"), Some(&"2".to_string()));
/// let keys: Vec<&str> = values.keys().collect();
/// assert_eq!(keys, ["page", "sort"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<V>) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value.into(),
            None => self.0.push((key, value.into())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut map: OrderedMap<String> = OrderedMap::new();
        map.insert("z", "1");
        map.insert("a", "2");
        map.insert("m", "3");
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_upsert_keeps_position() {
        let mut map: OrderedMap<String> = OrderedMap::new();
        map.insert("first", "1");
        map.insert("second", "2");
        map.insert("first", "updated");
        let entries: Vec<(&str, &String)> = map.iter().collect();
        assert_eq!(entries[0].0, "first");
        assert_eq!(entries[0].1, "updated");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_get_missing() {
        let map: OrderedMap<String> = OrderedMap::new();
        assert_eq!(map.get("nope"), None);
        assert!(!map.contains_key("nope"));
    }
}
