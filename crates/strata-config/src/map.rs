/*
 * map.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * In-memory configuration source backed by an insertion-ordered map.
 */

//! In-memory configuration source.
//!
//! [`MapConfiguration`] stores properties in insertion order and treats keys
//! as dotted paths (`server.http.port`) for enumeration: enumerating a prefix
//! yields the distinct next path segment below it.

use crate::error::ConfigResult;
use crate::source::Configuration;
use indexmap::{IndexMap, IndexSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A writeable, thread-safe configuration held entirely in memory.
#[derive(Debug, Default)]
pub struct MapConfiguration {
    // Values are plain strings, so a poisoned lock never leaves a partial update.
    entries: RwLock<IndexMap<String, String>>,
}

impl MapConfiguration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if no properties are stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Remove all properties.
    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K, V> FromIterator<(K, V)> for MapConfiguration
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl Configuration for MapConfiguration {
    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        Ok(self.read().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> ConfigResult<()> {
        self.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn enumerate(&self, prefix: &str) -> ConfigResult<Vec<String>> {
        let entries = self.read();
        let mut keys = IndexSet::new();

        for key in entries.keys() {
            let rest = if prefix.is_empty() {
                Some(key.as_str())
            } else {
                key.strip_prefix(prefix).and_then(|r| r.strip_prefix('.'))
            };
            if let Some(rest) = rest {
                let segment = rest.split_once('.').map_or(rest, |(head, _)| head);
                keys.insert(segment.to_string());
            }
        }

        Ok(keys.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MapConfiguration {
        [
            ("app.name", "strata"),
            ("app.version", "1"),
            ("server.http.port", "8080"),
            ("server.http.host", "localhost"),
            ("server.tls", "off"),
            ("standalone", "yes"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_get_and_set() {
        let config = MapConfiguration::new();
        assert!(config.is_empty());
        assert_eq!(config.get_raw("a").unwrap(), None);

        config.set_raw("a", "1").unwrap();
        assert_eq!(config.get_raw("a").unwrap(), Some("1".to_string()));
        assert_eq!(config.len(), 1);

        config.set_raw("a", "2").unwrap();
        assert_eq!(config.get_raw("a").unwrap(), Some("2".to_string()));
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let config: MapConfiguration = [("a", "1"), ("b", "2")].into_iter().collect();
        config.set_raw("a", "3").unwrap();
        assert_eq!(config.enumerate("").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_enumerate_root() {
        assert_eq!(
            sample().enumerate("").unwrap(),
            vec!["app", "server", "standalone"]
        );
    }

    #[test]
    fn test_enumerate_prefix() {
        let config = sample();
        assert_eq!(config.enumerate("app").unwrap(), vec!["name", "version"]);
        assert_eq!(config.enumerate("server").unwrap(), vec!["http", "tls"]);
        assert_eq!(config.enumerate("server.http").unwrap(), vec!["port", "host"]);
    }

    #[test]
    fn test_enumerate_requires_segment_boundary() {
        let config: MapConfiguration = [("apple", "1"), ("app.x", "2")].into_iter().collect();
        assert_eq!(config.enumerate("app").unwrap(), vec!["x"]);
    }

    #[test]
    fn test_enumerate_leaf_and_missing() {
        let config = sample();
        assert!(config.enumerate("standalone").unwrap().is_empty());
        assert!(config.enumerate("nope").unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let config = sample();
        config.clear();
        assert!(config.is_empty());
        assert!(config.enumerate("").unwrap().is_empty());
    }
}
