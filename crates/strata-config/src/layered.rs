/*
 * layered.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Priority-ordered composition of configuration layers.
 */

//! Layered configuration.
//!
//! A [`LayeredConfiguration`] consists of any number of [`Configuration`]
//! sources, each added with a priority. Lower priority values come first:
//!
//! - Reads search the layers in order and return the first hit.
//! - Writes go to the first layer marked writeable.
//! - Enumeration returns the union of every layer's keys, first-seen order.
//!
//! Layers with equal priority keep the order in which they were added.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use strata_config::{Configuration, LayeredConfiguration, MapConfiguration};
//!
//! let defaults: MapConfiguration = [("x", "1")].into_iter().collect();
//! let overrides = Arc::new(MapConfiguration::new());
//!
//! let mut config = LayeredConfiguration::new();
//! config.add_with_priority(Box::new(defaults), 10);
//! config.add_writeable(Arc::clone(&overrides), 5);
//!
//! config.set_raw("x", "2").unwrap();
//! assert_eq!(config.get_raw("x").unwrap().as_deref(), Some("2"));
//! assert_eq!(overrides.get_raw("x").unwrap().as_deref(), Some("2"));
//! ```

use crate::error::{ConfigError, ConfigResult};
use crate::layer::{LayerEntry, LayerSource};
use crate::source::Configuration;
use indexmap::IndexSet;
use std::fmt;

/// A configuration assembled from prioritized layers.
///
/// Adding layers requires `&mut self`; once assembled, the store can be
/// read from several threads at once. Writes are forwarded to the target
/// layer, which is responsible for its own synchronization.
#[derive(Default)]
pub struct LayeredConfiguration {
    /// Sorted by non-decreasing priority, insertion order among equals.
    layers: Vec<LayerEntry>,
}

impl LayeredConfiguration {
    /// Create an empty layered configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a read-only layer with priority 0.
    pub fn add(&mut self, source: impl Into<LayerSource>) {
        self.add_layer(source, 0, false);
    }

    /// Add a read-only layer with the given priority.
    pub fn add_with_priority(&mut self, source: impl Into<LayerSource>, priority: i32) {
        self.add_layer(source, priority, false);
    }

    /// Add a writeable layer with the given priority.
    pub fn add_writeable(&mut self, source: impl Into<LayerSource>, priority: i32) {
        self.add_layer(source, priority, true);
    }

    /// Add a layer with explicit priority and writeability.
    ///
    /// The layer is placed after every existing layer whose priority is less
    /// than or equal to `priority`.
    pub fn add_layer(&mut self, source: impl Into<LayerSource>, priority: i32, writeable: bool) {
        let entry = LayerEntry::new(source.into(), priority, writeable);
        let index = self.layers.partition_point(|l| l.priority <= priority);
        self.insert_at(index, entry);
    }

    /// Add a read-only layer ahead of every existing layer.
    ///
    /// The layer gets priority `lowest() - 1`, or 0 if the configuration is
    /// empty. Prefer an explicit priority via [`Self::add_with_priority`].
    pub fn add_front(&mut self, source: impl Into<LayerSource>) {
        let priority = self.lowest().map_or(0, |p| p.saturating_sub(1));
        // Index 0 rather than a search: at i32::MIN the priority ties with
        // the current front.
        let entry = LayerEntry::new(source.into(), priority, false);
        self.insert_at(0, entry);
    }

    /// Add a read-only layer behind every existing layer.
    ///
    /// The layer gets priority `highest() + 1`, or 0 if the configuration is
    /// empty.
    pub fn add_back(&mut self, source: impl Into<LayerSource>) {
        let priority = self.highest().map_or(0, |p| p.saturating_add(1));
        self.add_layer(source, priority, false);
    }

    /// The smallest priority currently present.
    pub fn lowest(&self) -> Option<i32> {
        self.layers.first().map(|l| l.priority)
    }

    /// The largest priority currently present.
    pub fn highest(&self) -> Option<i32> {
        self.layers.last().map(|l| l.priority)
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Check if no layers have been added.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Iterate over the layers in search order.
    pub fn layers(&self) -> impl Iterator<Item = &LayerEntry> {
        self.layers.iter()
    }

    fn insert_at(&mut self, index: usize, entry: LayerEntry) {
        tracing::debug!(
            priority = entry.priority,
            writeable = entry.writeable,
            ownership = ?entry.ownership(),
            position = index,
            "Adding configuration layer"
        );
        self.layers.insert(index, entry);
    }
}

impl Configuration for LayeredConfiguration {
    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        for (index, layer) in self.layers.iter().enumerate() {
            if let Some(value) = layer.source().get_raw(key)? {
                tracing::trace!(key, layer = index, priority = layer.priority, "Resolved property");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    fn set_raw(&self, key: &str, value: &str) -> ConfigResult<()> {
        let (index, layer) = self
            .layers
            .iter()
            .enumerate()
            .find(|(_, l)| l.writeable)
            .ok_or_else(|| ConfigError::NoWriteableLayer {
                key: key.to_string(),
            })?;

        tracing::trace!(key, layer = index, priority = layer.priority, "Writing property");
        layer.source().set_raw(key, value)
    }

    fn enumerate(&self, prefix: &str) -> ConfigResult<Vec<String>> {
        let mut keys = IndexSet::new();
        for layer in &self.layers {
            keys.extend(layer.source().enumerate(prefix)?);
        }
        Ok(keys.into_iter().collect())
    }
}

impl fmt::Debug for LayeredConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.layers.iter().map(|l| {
                format!(
                    "{}{} {:?}",
                    l.priority,
                    if l.writeable { " rw" } else { "" },
                    l.ownership()
                )
            }))
            .finish()
    }
}
