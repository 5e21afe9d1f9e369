/*
 * layer_spec.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Parsing of command-line layer descriptions.
 */

//! Command-line layer descriptions.
//!
//! A layer is written as whitespace-separated tokens:
//!
//! - `@N` sets the priority (default 0)
//! - `@rw` marks the layer writeable
//! - `KEY=VALUE` adds a property
//!
//! For example `"@5 @rw server.port=8080"`.

use anyhow::{Context, Result, bail};
use strata_config::MapConfiguration;

/// A parsed layer description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSpec {
    pub priority: i32,
    pub writeable: bool,
    pub entries: Vec<(String, String)>,
}

impl LayerSpec {
    /// Parse a full layer description, including `@` directives.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut layer = LayerSpec {
            priority: 0,
            writeable: false,
            entries: Vec::new(),
        };

        for token in spec.split_whitespace() {
            match token.strip_prefix('@') {
                Some("rw") => layer.writeable = true,
                Some(priority) => {
                    layer.priority = priority
                        .parse()
                        .with_context(|| format!("Invalid layer priority: {token}"))?;
                }
                None => layer.entries.push(parse_entry(token)?),
            }
        }

        Ok(layer)
    }

    /// Parse a description that may only contain properties.
    pub fn parse_plain(spec: &str) -> Result<Self> {
        let entries = spec
            .split_whitespace()
            .map(|token| {
                if token.starts_with('@') {
                    bail!("Layer directives are not allowed here: {token}");
                }
                parse_entry(token)
            })
            .collect::<Result<_>>()?;
        Ok(LayerSpec {
            priority: 0,
            writeable: false,
            entries,
        })
    }

    /// Build the in-memory source holding this layer's properties.
    pub fn to_source(&self) -> MapConfiguration {
        self.entries.iter().cloned().collect()
    }
}

fn parse_entry(token: &str) -> Result<(String, String)> {
    match token.split_once('=') {
        Some((key, _)) if key.split('.').any(str::is_empty) => {
            bail!("Key has an empty path segment: {token}")
        }
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => bail!("Expected KEY=VALUE, found: {token}"),
    }
}
