/*
 * source.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * The single-layer configuration contract.
 */

use crate::error::{ConfigError, ConfigResult};

/// A single source of string-valued configuration properties.
///
/// Implementors provide three raw primitives. How keys are structured and how
/// `enumerate` interprets a prefix is up to each source; the layered store
/// only delegates to them.
///
/// Writes take `&self` because a source may be shared by several owners at
/// once. Sources that support writes use interior mutability.
pub trait Configuration: Send + Sync {
    /// Look up a single key.
    ///
    /// Returns `Ok(None)` when the key is not defined. An `Err` means the
    /// source itself failed.
    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>>;

    /// Store a value under `key`.
    fn set_raw(&self, key: &str, value: &str) -> ConfigResult<()>;

    /// List the keys visible under `prefix`, in the source's own order.
    fn enumerate(&self, prefix: &str) -> ConfigResult<Vec<String>>;

    /// Check whether `key` is defined.
    fn has_property(&self, key: &str) -> ConfigResult<bool> {
        Ok(self.get_raw(key)?.is_some())
    }

    /// Get the value of `key`, failing with [`ConfigError::NotFound`] if it is
    /// not defined.
    fn get_string(&self, key: &str) -> ConfigResult<String> {
        self.get_raw(key)?.ok_or_else(|| ConfigError::NotFound {
            key: key.to_string(),
        })
    }

    /// Get the value of `key`, or `default` if it is not defined.
    fn get_string_or(&self, key: &str, default: &str) -> ConfigResult<String> {
        Ok(self
            .get_raw(key)?
            .unwrap_or_else(|| default.to_string()))
    }
}
