//! Parameter bindings

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Values bound to placeholder names.
///
/// Binding the same name twice keeps the last value. An empty value counts as
/// unbound, so the placeholder is left in place at resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    /// Creates an empty binding table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a value to a name, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Removes a binding, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    /// Returns the value that will replace `name`, if any.
    ///
    /// Empty values are reported as `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Copies every binding of `other` into this table. Values from `other` win.
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Returns the number of entries, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for Bindings
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
