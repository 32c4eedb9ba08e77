//! Per-root generation state, ordered by node path.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::expression::Expression;

/// Generation state for every node of one root property.
///
/// Entries are keyed by the canonical path string of the node and iterate in
/// path order regardless of insertion order. Path order is plain string
/// order, not numeric: `items[10]` comes before `items[2]`.
#[derive(Debug, Default)]
pub struct GeneratorContext<S> {
    states: Mutex<BTreeMap<String, S>>,
}

impl<S: Clone> GeneratorContext<S> {
    pub fn new() -> Self {
        Self {
            states: Mutex::new(BTreeMap::new()),
        }
    }

    pub fn get(&self, path: &Expression) -> Option<S> {
        self.lock().get(&path.to_string()).cloned()
    }

    /// Stores state for `path`, returning the previous state.
    pub fn insert(&self, path: &Expression, state: S) -> Option<S> {
        self.lock().insert(path.to_string(), state)
    }

    /// Returns the state for `path`, creating it with `create` if absent.
    pub fn get_or_insert_with<F>(&self, path: &Expression, create: F) -> S
    where
        F: FnOnce() -> S,
    {
        self.lock().entry(path.to_string()).or_insert_with(create).clone()
    }

    pub fn remove(&self, path: &Expression) -> Option<S> {
        self.lock().remove(&path.to_string())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Node paths in iteration order.
    pub fn paths(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Copy of every `(path, state)` pair in path order.
    pub fn entries(&self) -> Vec<(String, S)> {
        self.lock()
            .iter()
            .map(|(path, state)| (path.clone(), state.clone()))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, S>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
