//! MemoryRegistrationGateway - in-memory registration store
//!
//! Keeps keys in insertion order so tests can control the enumeration order
//! the walker sees. Key lookups are case-insensitive, like the registry.

use std::cell::Cell;

use crate::domain::repositories::registration_store::RegistrationStore;

#[derive(Clone, Debug)]
struct KeyEntry {
    path: String,
    default: Option<String>,
}

/// In-memory registration store
#[derive(Default)]
pub struct MemoryRegistrationGateway {
    keys: Vec<KeyEntry>,
    lookups: Cell<usize>,
}

impl MemoryRegistrationGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key (and any missing parents) with an optional default value
    pub fn with_key(mut self, path: &str, default: Option<&str>) -> Self {
        self.insert(path, default);
        self
    }

    /// Add a key without a default value
    pub fn with_empty_key(self, path: &str) -> Self {
        self.with_key(path, None)
    }

    /// Add a key whose default value is `value`
    pub fn with_value(self, path: &str, value: &str) -> Self {
        self.with_key(path, Some(value))
    }

    pub fn insert(&mut self, path: &str, default: Option<&str>) {
        let mut prefix = String::new();
        for segment in path.split('\\') {
            if !prefix.is_empty() {
                prefix.push('\\');
            }
            prefix.push_str(segment);
            if self.find(&prefix).is_none() {
                self.keys.push(KeyEntry {
                    path: prefix.clone(),
                    default: None,
                });
            }
        }
        if let Some(idx) = self.find(path) {
            self.keys[idx].default = default.map(str::to_string);
        }
    }

    /// Number of read calls made against the store
    pub fn lookup_count(&self) -> usize {
        self.lookups.get()
    }

    fn find(&self, path: &str) -> Option<usize> {
        self.keys
            .iter()
            .position(|k| k.path.eq_ignore_ascii_case(path))
    }
}

impl RegistrationStore for MemoryRegistrationGateway {
    fn subkeys(&self, path: &str) -> Option<Vec<String>> {
        self.lookups.set(self.lookups.get() + 1);
        self.find(path)?;
        let depth = path.split('\\').count();
        let children = self
            .keys
            .iter()
            .filter(|k| {
                k.path.split('\\').count() == depth + 1
                    && k.path.len() > path.len()
                    && k.path
                        .get(..path.len())
                        .is_some_and(|head| head.eq_ignore_ascii_case(path))
                    && k.path.as_bytes()[path.len()] == b'\\'
            })
            .map(|k| k.path[path.len() + 1..].to_string())
            .collect();
        Some(children)
    }

    fn default_value(&self, path: &str) -> Option<String> {
        self.lookups.set(self.lookups.get() + 1);
        self.find(path).and_then(|idx| self.keys[idx].default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subkeys_in_insertion_order() {
        let store = MemoryRegistrationGateway::new()
            .with_value(".clip\\ShellEx\\b", "x")
            .with_value(".clip\\ShellEx\\a", "y");

        assert_eq!(
            store.subkeys(".clip\\ShellEx"),
            Some(vec!["b".to_string(), "a".to_string()])
        );
        assert_eq!(store.subkeys(".CLIP\\shellex").map(|v| v.len()), Some(2));
    }

    #[test]
    fn test_missing_key() {
        let store = MemoryRegistrationGateway::new().with_empty_key(".clip");

        assert_eq!(store.subkeys(".clip"), Some(vec![]));
        assert_eq!(store.subkeys(".txt"), None);
        assert_eq!(store.default_value(".clip"), None);
        assert_eq!(store.lookup_count(), 3);
    }
}
