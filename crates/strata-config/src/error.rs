/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Error taxonomy shared by configuration sources and the layered store.
 */

use thiserror::Error;

/// Result alias used throughout the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during configuration operations.
///
/// The layered store only ever raises [`ConfigError::NoWriteableLayer`] itself.
/// Every other variant originates in a source and is passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A write was attempted but no layer is marked writeable.
    #[error("No writeable configuration layer to store property: {key}")]
    NoWriteableLayer {
        /// Key that was being written
        key: String,
    },

    /// A property was required but no source defines it.
    #[error("Property not found: {key}")]
    NotFound {
        /// Key that was looked up
        key: String,
    },

    /// The source refuses writes to this key.
    #[error("Property is read-only: {key}")]
    ReadOnly {
        /// Key that was being written
        key: String,
    },

    /// Any other failure reported by a source implementation.
    #[error("Configuration source error: {0}")]
    Source(String),
}
