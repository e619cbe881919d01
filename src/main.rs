//! Planar Engine demo entry point.
//!
//! Runs the engine core headless: an arena of pooled, drifting collision
//! boxes advanced by a fixed-step schedule, with collision events counted
//! and `"debris"` entities despawned on impact.
//!
//! # Main Loop
//!
//! 1. Load [`EngineConfig`] (INI file, safe defaults when absent)
//! 2. Build the ECS world, spawn walls and drifters from the shared pool
//! 3. Register observers and systems
//! 4. Step the schedule `--steps` times at the configured timestep
//! 5. Log collision totals, movement notifications and pool state
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --steps 600 --bodies 24
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};

use planarengine::collision::Geometry;
use planarengine::events::collision::observe_despawn_debris_on_collision;
use planarengine::game::{
    CollisionStats, MoveTracker, observe_count_collisions, setup_world, spawn_drifters,
    spawn_walls,
};
use planarengine::resources::engineconfig::EngineConfig;
use planarengine::systems::collision::collision_detector;
use planarengine::systems::movement::movement_system;
use planarengine::systems::time::update_world_time;

/// Planar Engine headless demo
#[derive(Parser)]
#[command(version, about = "Collision core demo: drifting boxes in a walled arena")]
struct Cli {
    /// Number of fixed simulation steps to run.
    #[arg(long, default_value_t = 600)]
    steps: u32,

    /// Number of drifting boxes to spawn.
    #[arg(long, default_value_t = 24)]
    bodies: u32,

    /// Seed for the scene layout; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to the engine INI config (default: ./engine.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EngineConfig::with_path(path),
        None => EngineConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("using default config: {e}");
    }
    let timestep = config.timestep;

    let mut world = setup_world(config);
    world.add_observer(observe_count_collisions);
    world.add_observer(observe_despawn_debris_on_collision);

    let geometry = Geometry::new();
    let tracker = Arc::new(MoveTracker::default());
    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    spawn_walls(&mut world, &geometry);
    spawn_drifters(&mut world, &geometry, cli.bodies, &mut rng, &tracker);

    let mut update = Schedule::default();
    update.add_systems(movement_system);
    update.add_systems(collision_detector.after(movement_system));

    for _ in 0..cli.steps {
        update_world_time(&mut world, timestep);
        update.run(&mut world);
    }

    let stats = world.resource::<CollisionStats>();
    info!(
        "ran {} steps: {} collisions, {} movement notifications, {} boxes pooled",
        cli.steps,
        stats.total,
        tracker.moved_count(),
        geometry.pooled_boxes()
    );
}
