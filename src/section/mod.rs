use indexmap::IndexMap;
use indexmap::map::{Iter, IterMut};

use crate::CfgError;
use crate::ast::Value;

mod access;
mod conversion;

/// Insertion-ordered map of unique keys to values.
///
/// Both the root document and every nested `{ ... }` block are sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    entries: IndexMap<String, Value>,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a new entry at the end. Fails if `key` is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<(), CfgError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(CfgError::DuplicateKey {
                key,
                line: 0,
                column: 0,
                hint: Some("Keys must be unique within a section".into()),
                code: Some(206),
            });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Adds or replaces an entry, keeping the original position on replace.
    pub fn insert_or_replace(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Caller has already checked that `key` is absent.
    pub(crate) fn push_parsed(&mut self, key: String, value: Value) {
        debug_assert!(!self.entries.contains_key(&key));
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes an entry, shifting later entries so order is preserved.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Section {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
