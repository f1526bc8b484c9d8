//! Shared rendering surface.
//!
//! Rendered emblems land on a surface keyed by id. The surface is the
//! only state renders share: a first-insert-wins existence check makes
//! rendering idempotent per id, including across concurrent renders of
//! different emblems.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

/// Collects rendered markup, one entry per emblem id.
#[derive(Debug, Default)]
pub struct Surface {
    entries: Mutex<BTreeMap<String, String>>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an id has been rendered already.
    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    /// Insert markup for an id unless it already exists. Returns whether
    /// this call inserted.
    pub fn insert_once(&self, id: &str, markup: String) -> bool {
        let mut entries = self.lock();
        if entries.contains_key(id) {
            return false;
        }
        entries.insert(id.to_string(), markup);
        true
    }

    /// Markup stored for an id.
    pub fn get(&self, id: &str) -> Option<String> {
        self.lock().get(id).cloned()
    }

    /// Rendered ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_once_is_first_wins() {
        let surface = Surface::new();
        assert!(surface.insert_once("a", "<svg>first</svg>".to_string()));
        assert!(!surface.insert_once("a", "<svg>second</svg>".to_string()));
        assert_eq!(surface.get("a").as_deref(), Some("<svg>first</svg>"));
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_contains_and_ids() {
        let surface = Surface::new();
        assert!(surface.is_empty());
        surface.insert_once("b", String::new());
        surface.insert_once("a", String::new());
        assert!(surface.contains("a"));
        assert!(!surface.contains("c"));
        assert_eq!(surface.ids(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_concurrent_inserts_keep_one_entry() {
        let surface = Surface::new();
        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    surface.insert_once("shared", "<svg/>".to_string());
                });
            }
        });
        assert_eq!(surface.len(), 1);
    }
}
