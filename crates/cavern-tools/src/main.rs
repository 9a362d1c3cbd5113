//! # Cavern Gen
//!
//! Command-line front end for the Cavern world generator.
//!
//! Loads `cavern.toml` (or `--config`), applies CLI overrides, generates a
//! world from `--seed` and prints either a summary or the full world as JSON.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod cli;
mod report;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cavern_worldgen::config::CONFIG_FILE;
use cavern_worldgen::{Constraints, WorldGenConfig, WorldGenerator};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::CliArgs;
use crate::report::{traversal_lines, WorldSummary};

/// Main entry point.
fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for JSON
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive("cavern_worldgen=info".parse()?))
        .init();

    let args = CliArgs::parse();

    let mut config = WorldGenConfig::load_from(args.config.as_deref().unwrap_or(Path::new(CONFIG_FILE)));
    args.apply_overrides(&mut config);

    if let Some(path) = &args.save_config {
        config
            .save_to(path)
            .with_context(|| format!("writing config to {}", path.display()))?;
    }

    let generator = WorldGenerator::with_config(config);
    let mut world = generator
        .generate(args.seed, &Constraints::new())
        .with_context(|| format!("generating world for seed {}", args.seed))?;

    let abilities = args.ability_set();
    let output = if args.json {
        world.apply_ability_gates(abilities);
        serde_json::to_string_pretty(&world).context("serializing world")?
    } else {
        let mut text = WorldSummary::build(&mut world, abilities).to_string();
        if args.traversal {
            text.push_str("\ntraversal:");
            for line in traversal_lines(&world, abilities) {
                text.push_str("\n  ");
                text.push_str(&line);
            }
        }
        text
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote world to {}", path.display());
        },
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}")?;
        },
    }

    Ok(())
}
