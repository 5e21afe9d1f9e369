/*
 * layer.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Layer entries: a configuration source plus its priority, writeability
 * and ownership.
 */

use crate::source::Configuration;
use std::fmt;
use std::sync::Arc;

/// How the layered store holds a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The store holds one reference among possibly many. Dropping the store
    /// releases that reference only.
    Shared,
    /// The store is the sole owner and drops the source with itself.
    Exclusive,
}

/// A handle to a configuration source, tagged with its ownership mode.
///
/// Build one with `From`: an `Arc<C>` becomes a shared layer and a `Box<C>`
/// becomes an exclusively owned one. Trait objects can be wrapped in the
/// variants directly.
pub enum LayerSource {
    /// A reference-counted handle shared with other owners.
    Shared(Arc<dyn Configuration>),
    /// A source owned by the layer alone.
    Exclusive(Box<dyn Configuration>),
}

impl LayerSource {
    /// The ownership mode of this handle.
    pub fn ownership(&self) -> Ownership {
        match self {
            LayerSource::Shared(_) => Ownership::Shared,
            LayerSource::Exclusive(_) => Ownership::Exclusive,
        }
    }

    /// Borrow the underlying source.
    pub fn as_config(&self) -> &dyn Configuration {
        match self {
            LayerSource::Shared(config) => config.as_ref(),
            LayerSource::Exclusive(config) => config.as_ref(),
        }
    }
}

impl<C: Configuration + 'static> From<Arc<C>> for LayerSource {
    fn from(config: Arc<C>) -> Self {
        LayerSource::Shared(config)
    }
}

impl<C: Configuration + 'static> From<Box<C>> for LayerSource {
    fn from(config: Box<C>) -> Self {
        LayerSource::Exclusive(config)
    }
}

impl fmt::Debug for LayerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerSource::Shared(_) => f.write_str("Shared(..)"),
            LayerSource::Exclusive(_) => f.write_str("Exclusive(..)"),
        }
    }
}

/// One source participating in a layered configuration.
#[derive(Debug)]
pub struct LayerEntry {
    pub(crate) source: LayerSource,
    pub(crate) priority: i32,
    pub(crate) writeable: bool,
}

impl LayerEntry {
    pub(crate) fn new(source: LayerSource, priority: i32, writeable: bool) -> Self {
        Self {
            source,
            priority,
            writeable,
        }
    }

    /// Priority of this layer. Lower values are consulted first.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Whether writes may be directed at this layer.
    pub fn is_writeable(&self) -> bool {
        self.writeable
    }

    /// How the store holds this layer's source.
    pub fn ownership(&self) -> Ownership {
        self.source.ownership()
    }

    /// The configuration source of this layer.
    pub fn source(&self) -> &dyn Configuration {
        self.source.as_config()
    }
}
