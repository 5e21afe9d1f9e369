//! strata CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod layer_spec;

use layer_spec::LayerSpec;

#[derive(Parser)]
#[command(name = "strata")]
#[command(version)]
#[command(about = "Query a configuration assembled from prioritized layers", long_about = None)]
struct Cli {
    /// Add a layer ("@PRIORITY", "@rw" and KEY=VALUE tokens)
    #[arg(short = 'L', long = "layer", value_parser = LayerSpec::parse)]
    layers: Vec<LayerSpec>,

    /// Add a read-only layer in front of all others (KEY=VALUE tokens)
    #[arg(long, value_parser = LayerSpec::parse_plain)]
    front: Vec<LayerSpec>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved value of a key
    Get {
        /// Property key
        key: String,
    },

    /// List the keys visible under a prefix
    Keys {
        /// Key prefix (empty for the root)
        #[arg(default_value = "")]
        prefix: String,
    },

    /// Write a value to the first writeable layer
    Set {
        /// Property key
        key: String,

        /// New value
        value: String,
    },

    /// Show the layers in search order
    Layers,

    /// Print every resolved property under a prefix
    Dump {
        /// Key prefix (empty for the root)
        #[arg(default_value = "")]
        prefix: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strata=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = commands::assemble(&cli.layers, &cli.front);

    let lines = match cli.command {
        Commands::Get { key } => commands::get(&config, &key)?,
        Commands::Keys { prefix } => commands::keys(&config, &prefix)?,
        Commands::Set { key, value } => commands::set(&config, &key, &value)?,
        Commands::Layers => commands::layers(&config)?,
        Commands::Dump { prefix } => commands::dump(&config, &prefix)?,
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}
