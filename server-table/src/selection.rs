//! Row selection for the table base.

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// How many rows may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Rows cannot be selected.
    #[default]
    None,
    /// At most one row.
    Single,
    /// Any number of rows.
    Multi,
}

/// Selected row keys.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    mode: SelectionMode,
    keys: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new(SelectionMode::None)
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            keys: HashSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Toggle a key. Returns true if the selection changed.
    pub fn toggle(&mut self, key: K) -> bool {
        match self.mode {
            SelectionMode::None => false,
            SelectionMode::Single => {
                let was_selected = self.keys.contains(&key);
                self.keys.clear();
                if !was_selected {
                    self.keys.insert(key);
                }
                true
            }
            SelectionMode::Multi => {
                if !self.keys.remove(&key) {
                    self.keys.insert(key);
                }
                true
            }
        }
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Drop every key the predicate rejects.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.keys.retain(|k| keep(k));
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }
}
