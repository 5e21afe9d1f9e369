//! Priority-ordered composition of configuration sources.
//!
//! This crate builds one logical configuration out of several independent
//! sources. Each source is added as a layer with a priority; lookups search
//! the layers from the lowest priority value upward and writes go to the
//! first layer marked writeable.
//!
//! # Key Features
//!
//! - **Stable ordering**: layers sort by priority, ties keep insertion order
//! - **First match wins**: reads stop at the first layer defining a key
//! - **Explicit ownership**: a layer is either shared (`Arc`) or owned (`Box`)
//! - **Nesting**: [`LayeredConfiguration`] is itself a [`Configuration`]
//!
//! # Architecture
//!
//! - [`Configuration`]: the contract every source implements
//! - [`MapConfiguration`]: an in-memory source with dotted-path keys
//! - [`LayerEntry`] / [`LayerSource`]: a source plus its layer metadata
//! - [`LayeredConfiguration`]: the ordered layer list
//!
//! # Example
//!
//! ```rust
//! use strata_config::{Configuration, LayeredConfiguration, MapConfiguration};
//!
//! let base: MapConfiguration = [("a", "1"), ("b", "2")].into_iter().collect();
//! let extra: MapConfiguration = [("b", "9"), ("c", "3")].into_iter().collect();
//!
//! let mut config = LayeredConfiguration::new();
//! config.add(Box::new(base));
//! config.add(Box::new(extra));
//!
//! assert_eq!(config.enumerate("").unwrap(), vec!["a", "b", "c"]);
//! assert_eq!(config.get_string("b").unwrap(), "2");
//! ```

mod error;
mod layer;
mod layered;
mod map;
mod source;

pub use error::{ConfigError, ConfigResult};

pub use layer::{LayerEntry, LayerSource, Ownership};

pub use layered::LayeredConfiguration;

pub use map::MapConfiguration;

pub use source::Configuration;
