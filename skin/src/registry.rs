//! Typed index from marker value to the element handles carrying it.
//!
//! DESIGN
//! ======
//! A view root is scanned once per pass and every marked element is grouped
//! under its marker, so the applicator never issues per-assignment queries.
//! [`ClassTarget`] is the only way the applicator touches an element and it
//! has no removal method: class application is additive by construction.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;

use crate::marker::Marker;

/// An element whose class set can be inspected and grown.
pub trait ClassTarget {
    fn has_class(&self, class: &str) -> bool;

    /// Add `class`. Adding a class that is already present is a no-op.
    fn add_class(&self, class: &str);
}

#[derive(Debug)]
pub struct MarkerRegistry<T> {
    entries: HashMap<Marker, Vec<T>>,
    handles: usize,
}

impl<T> Default for MarkerRegistry<T> {
    fn default() -> Self {
        Self { entries: HashMap::new(), handles: 0 }
    }
}

impl<T> MarkerRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handle` under `marker`. Handles keep insertion order.
    pub fn insert(&mut self, marker: Marker, handle: T) {
        self.entries.entry(marker).or_default().push(handle);
        self.handles += 1;
    }

    /// Register `handle` under a raw attribute value, ignoring blank markers.
    ///
    /// Returns whether the handle was registered.
    pub fn insert_raw(&mut self, raw: &str, handle: T) -> bool {
        match Marker::new(raw) {
            Ok(marker) => {
                self.insert(marker, handle);
                true
            }
            Err(_) => false,
        }
    }

    /// Handles registered under `marker`; empty when none are.
    #[must_use]
    pub fn targets(&self, marker: &str) -> &[T] {
        self.entries.get(marker).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, marker: &str) -> bool {
        self.entries.contains_key(marker)
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.entries.keys()
    }

    /// Total number of registered handles across all markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles == 0
    }
}

impl<T> FromIterator<(Marker, T)> for MarkerRegistry<T> {
    fn from_iter<I: IntoIterator<Item = (Marker, T)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (marker, handle) in iter {
            registry.insert(marker, handle);
        }
        registry
    }
}
