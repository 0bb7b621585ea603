#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::time::{Duration, Instant};

use anyhow::Context;
use pacman_pursuit::{
    config::load_config,
    game::{events::GameEvent, Game},
    logging::setup_logging,
    map::pathfinding::compare_searches,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

/// The main entry point of the application.
///
/// Runs a headless game until the configured tick or level limit is reached.
pub fn main() -> anyhow::Result<()> {
    setup_logging();

    let config = load_config().context("Could not load configuration")?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let max_ticks = config.max_ticks;
    let max_level = config.max_level;
    let loop_time = config.tick_rate.map(|rate| Duration::from_secs(1) / rate);

    let mut game = Game::new(config, rng).context("Could not create game")?;

    // Race the two searches between Pac-Man and the first ghost
    let start = game.pacman().cell;
    let end = game.ghosts().first().map_or(start, |ghost| ghost.cell);
    let race = compare_searches(game.graph(), start, end);
    info!(
        start,
        end,
        bfs_steps = race.bfs.result.steps,
        bfs_length = race.bfs.result.len(),
        bfs_time = ?race.bfs.elapsed,
        dfs_steps = race.dfs.result.steps,
        dfs_length = race.dfs.result.len(),
        dfs_time = ?race.dfs.elapsed,
        "Path search comparison"
    );

    info!(?loop_time, max_ticks, max_level, "Starting game loop");

    while game.ticks() < max_ticks && game.level() < max_level {
        let frame_start = Instant::now();

        let events = game.tick().context("Game tick failed")?;

        for event in events {
            match event {
                GameEvent::LevelAdvanced { level } => info!(level, "Level complete"),
                GameEvent::PursuedCaught { cell, ghost } => info!(cell, ghost, "Pac-Man caught"),
                other => debug!(event = ?other, "Game event"),
            }
        }

        if let Some(loop_time) = loop_time {
            match loop_time.checked_sub(frame_start.elapsed()) {
                Some(remaining) => spin_sleep::sleep(remaining),
                None => warn!("Game loop behind schedule by: {:?}", frame_start.elapsed() - loop_time),
            }
        }
    }

    let stats = game.search_stats();
    info!(
        ticks = game.ticks(),
        level = game.level(),
        score = game.score(),
        remaining = game.collectibles().len(),
        nodes = stats.nodes,
        leaves = stats.leaves,
        "Simulation finished"
    );

    Ok(())
}
