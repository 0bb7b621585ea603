use figment::{providers::Env, Figment};
use serde::Deserialize;

use crate::constants::{BOARD_COLUMNS, BOARD_ROWS, PURSUER_RANDOM_MOVE_CHANCE, RAW_MAZE, SEARCH_DEPTH};
use crate::error::ConfigError;

/// Prefix shared by every environment variable the game reads.
pub const ENV_PREFIX: &str = "PURSUIT_";

/// Main game configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Maze height, in cells
    pub rows: usize,
    /// Maze width, in cells
    pub columns: usize,
    /// Maze layout as a `0`/`1` digit string
    pub maze: String,
    /// Seed for the game's random source - if None, the OS provides entropy
    pub seed: Option<u64>,
    /// Minimax look-ahead, in plies
    pub search_depth: u32,
    /// Probability that a ghost replaces its planned move with a random neighbor
    pub pursuer_random_move_chance: f64,
    /// Number of ticks the headless simulation runs before stopping
    pub max_ticks: u64,
    /// The simulation stops once this level is reached
    pub max_level: u32,
    /// Ticks per second - if None, the simulation runs unthrottled
    pub tick_rate: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rows: BOARD_ROWS,
            columns: BOARD_COLUMNS,
            maze: RAW_MAZE.to_string(),
            seed: None,
            search_depth: default_search_depth(),
            pursuer_random_move_chance: default_pursuer_random_move_chance(),
            max_ticks: default_max_ticks(),
            max_level: default_max_level(),
            tick_rate: None,
        }
    }
}

/// Raw configuration loaded directly from environment variables
/// This is an intermediate representation that gets validated and converted to Config
#[derive(Debug, Deserialize)]
struct RawConfig {
    seed: Option<u64>,
    #[serde(default = "default_search_depth")]
    search_depth: u32,
    #[serde(default = "default_pursuer_random_move_chance")]
    pursuer_random_move_chance: f64,
    #[serde(default = "default_max_ticks")]
    max_ticks: u64,
    #[serde(default = "default_max_level")]
    max_level: u32,
    tick_rate: Option<u32>,
}

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        if raw.search_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "search_depth",
                reason: "must be at least 1".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&raw.pursuer_random_move_chance) {
            return Err(ConfigError::InvalidValue {
                field: "pursuer_random_move_chance",
                reason: format!("{} is not a probability", raw.pursuer_random_move_chance),
            });
        }

        if raw.max_level == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_level",
                reason: "must be at least 1".to_string(),
            });
        }

        if raw.tick_rate == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate",
                reason: "must be positive when set".to_string(),
            });
        }

        Ok(Config {
            seed: raw.seed,
            search_depth: raw.search_depth,
            pursuer_random_move_chance: raw.pursuer_random_move_chance,
            max_ticks: raw.max_ticks,
            max_level: raw.max_level,
            tick_rate: raw.tick_rate,
            ..Config::default()
        })
    }
}

fn default_search_depth() -> u32 {
    SEARCH_DEPTH
}

fn default_pursuer_random_move_chance() -> f64 {
    PURSUER_RANDOM_MOVE_CHANCE
}

fn default_max_ticks() -> u64 {
    2000
}

fn default_max_level() -> u32 {
    4
}

/// Loads the configuration from `PURSUIT_*` environment variables, falling back to defaults.
pub fn load_config() -> Result<Config, ConfigError> {
    let raw: RawConfig = Figment::new()
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .map_err(Box::new)?;

    Config::try_from(raw)
}
