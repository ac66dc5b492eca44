//! Demo binary that roams a camera across procedurally generated terrain.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p ridgeline-demo -- --seed 42` to pick a
//! world, or `--window-radius 3` to widen the render window.
//!
//! The walk mirrors a renderer's frame loop: the render buffer is rebuilt
//! only when the camera's containing chunk changes, and every step probes
//! the ground below the camera the way a collision system would.

use clap::Parser;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use ridgeline_config::{CliArgs, TerrainConfig, default_config_dir};
use ridgeline_log::init_logging;
use ridgeline_terrain::{CacheParams, ChunkCoord, TerrainCache, cell_contacts};
use tracing::{debug, info, warn};

/// Number of camera steps to walk before reporting.
const WALK_STEPS: u32 = 64;

/// How close the camera's feet must be to a face to count as contact.
const CONTACT_TOLERANCE: f32 = 0.05;

fn main() {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = match TerrainConfig::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config unavailable ({err}), using defaults");
            TerrainConfig::default()
        }
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    init_logging(Some(log_dir.as_path()), cfg!(debug_assertions), Some(&config));

    info!(
        seed = config.world.seed,
        window_radius = config.world.window_radius,
        render_capacity = config.world.render_capacity,
        "starting terrain walk"
    );

    let mut cache = TerrainCache::new(CacheParams {
        world_seed: config.world.seed,
        window_radius: config.world.window_radius,
        render_capacity: config.world.render_capacity,
        eviction_margin: config.world.eviction_margin,
    });

    let mut rng = Xoshiro256StarStar::seed_from_u64(config.world.seed);
    let mut camera = Vec3::new(8.0, 12.0, 8.0);
    let mut prev_chunk: Option<ChunkCoord> = None;
    let mut rebuilds = 0u32;

    for step in 0..WALK_STEPS {
        let current = ChunkCoord::containing(camera);
        if prev_chunk != Some(current) {
            prev_chunk = Some(current);
            let buffer = cache.surface_for_render(camera);
            rebuilds += 1;
            info!(
                step,
                chunk_x = current.x,
                chunk_z = current.z,
                points = buffer.len(),
                resident = cache.loaded_count(),
                "rebuilt render window"
            );
        }

        // Gravity-style ground probe under the camera, through the same
        // chunk mapping the renderer uses.
        match cache.ground_height(camera.x, camera.z) {
            Some(ground) => {
                let surface_y = ground.round();
                let cell = Vec3::new(camera.x.floor(), surface_y, camera.z.floor());
                let feet = Vec3::new(camera.x, surface_y + 1.0, camera.z);
                let contacts = cell_contacts(feet, cell, CONTACT_TOLERANCE);
                if !contacts.is_empty() {
                    debug!(step, ?contacts, "standing on terrain");
                }
                // Keep the camera above the surface cube.
                camera.y = camera.y.max(surface_y + 2.0);
            }
            None => {
                warn!(step, x = camera.x, z = camera.z, "no ground cell under camera");
            }
        }

        camera.x += rng.gen_range(2.0..6.0);
        camera.z += rng.gen_range(-3.0..5.0);
    }

    info!(
        rebuilds,
        generated = cache.generated_count(),
        resident = cache.loaded_count(),
        "walk complete"
    );
}
