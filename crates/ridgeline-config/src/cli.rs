//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::TerrainConfig;

/// Ridgeline command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "ridgeline", about = "Ridgeline terrain generator")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render window radius in chunks.
    #[arg(long)]
    pub window_radius: Option<u32>,

    /// Target render buffer capacity in points.
    #[arg(long)]
    pub render_capacity: Option<usize>,

    /// Chunks kept resident beyond the render window.
    #[arg(long)]
    pub eviction_margin: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl TerrainConfig {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(radius) = args.window_radius {
            self.world.window_radius = radius;
        }
        if let Some(capacity) = args.render_capacity {
            self.world.render_capacity = capacity;
        }
        if let Some(margin) = args.eviction_margin {
            self.world.eviction_margin = margin;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
