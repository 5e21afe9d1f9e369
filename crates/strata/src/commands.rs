/*
 * commands.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Subcommand implementations for the strata CLI.
 */

use crate::layer_spec::LayerSpec;
use anyhow::{Context, Result};
use strata_config::{Configuration, LayeredConfiguration, Ownership};

/// Assemble the layered configuration from parsed command-line layers.
///
/// `front` layers are added last, each ahead of everything added before it.
pub fn assemble(layers: &[LayerSpec], front: &[LayerSpec]) -> LayeredConfiguration {
    let mut config = LayeredConfiguration::new();
    for layer in layers {
        config.add_layer(Box::new(layer.to_source()), layer.priority, layer.writeable);
    }
    for layer in front {
        config.add_front(Box::new(layer.to_source()));
    }
    config
}

pub fn get(config: &LayeredConfiguration, key: &str) -> Result<Vec<String>> {
    let value = config.get_string(key)?;
    Ok(vec![value])
}

pub fn keys(config: &LayeredConfiguration, prefix: &str) -> Result<Vec<String>> {
    Ok(config.enumerate(prefix)?)
}

pub fn set(config: &LayeredConfiguration, key: &str, value: &str) -> Result<Vec<String>> {
    config
        .set_raw(key, value)
        .with_context(|| format!("Failed to set {key}"))?;
    tracing::info!(key, value, "Property written");
    Ok(vec![format!("{key}={}", config.get_string(key)?)])
}

pub fn layers(config: &LayeredConfiguration) -> Result<Vec<String>> {
    config
        .layers()
        .enumerate()
        .map(|(index, layer)| -> Result<String> {
            let ownership = match layer.ownership() {
                Ownership::Shared => "shared",
                Ownership::Exclusive => "exclusive",
            };
            Ok(format!(
                "{index}\t{}\t{}\t{ownership}\t{}",
                layer.priority(),
                if layer.is_writeable() { "rw" } else { "ro" },
                layer.source().enumerate("")?.join(",")
            ))
        })
        .collect()
}

/// List every defined key under `prefix` with its resolved value.
pub fn dump(config: &dyn Configuration, prefix: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    collect(config, prefix, &mut lines)?;
    Ok(lines)
}

fn collect(config: &dyn Configuration, prefix: &str, lines: &mut Vec<String>) -> Result<()> {
    for child in config.enumerate(prefix)? {
        // An empty segment would repeat the current prefix forever
        if child.is_empty() {
            continue;
        }
        let key = if prefix.is_empty() {
            child
        } else {
            format!("{prefix}.{child}")
        };
        if let Some(value) = config.get_raw(&key)? {
            lines.push(format!("{key}={value}"));
        }
        collect(config, &key, lines)?;
    }
    Ok(())
}
