//! This module contains the main game logic and state.
//!
//! The [`Game`] plays the role of the host loop around the planner: it owns the agents, the
//! collectibles, score and level, and advances everything by one cell per [`Game::tick`].
//! Rendering and animation between cells are left to whoever drives it.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::error::{GameResult, MapError};
use crate::formatter;
use crate::map::graph::{CellId, MazeGraph};
use crate::planner::{PursuitPlanner, SearchStats};

use self::events::{AgentId, GameEvent};
use self::state::{spawn_cell, Agent, AgentPhase};

pub mod events;
pub mod state;

type Ghosts = SmallVec<[Agent; 4]>;

/// The `Game` struct holds all the essential data for one running game.
///
/// The random source is injected so that a seeded generator replays a game exactly.
pub struct Game<R: Rng = StdRng> {
    config: Config,
    rng: R,
    graph: MazeGraph,
    pacman: Agent,
    ghosts: Ghosts,
    collectibles: BTreeSet<CellId>,
    score: u32,
    level: u32,
    ticks: u64,
    stats: SearchStats,
}

impl<R: Rng> Game<R> {
    /// Builds the maze described by `config` and sets up the first level.
    ///
    /// # Errors
    ///
    /// Fails if the maze layout is malformed or too small to hold Pac-Man and the first ghost.
    pub fn new(config: Config, mut rng: R) -> GameResult<Self> {
        let graph = MazeGraph::new(config.rows, config.columns, &config.maze)?;
        let (pacman, ghosts, collectibles) = populate(&graph, &mut rng, 1)?;

        info!(
            rows = graph.rows(),
            columns = graph.columns(),
            open = graph.open_cell_count(),
            pacman = pacman.cell,
            "Game created"
        );

        Ok(Game {
            config,
            rng,
            graph,
            pacman,
            ghosts,
            collectibles,
            score: 0,
            level: 1,
            ticks: 0,
            stats: SearchStats::default(),
        })
    }

    pub fn graph(&self) -> &MazeGraph {
        &self.graph
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pacman(&self) -> &Agent {
        &self.pacman
    }

    pub fn ghosts(&self) -> &[Agent] {
        &self.ghosts
    }

    pub fn collectibles(&self) -> &BTreeSet<CellId> {
        &self.collectibles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The current level, starting at 1. It is also the number of ghosts on the board.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Search effort accumulated over every plan made so far.
    pub fn search_stats(&self) -> SearchStats {
        self.stats
    }

    /// Puts an agent at rest on `cell`, dropping any move it had planned.
    ///
    /// Collectibles are left alone; Pac-Man claims whatever lies on `cell` on the next tick.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::CellOutOfBounds`] if `cell` is outside the maze, or
    /// [`MapError::UnknownGhost`] if there is no such ghost on this level.
    pub fn place(&mut self, agent: AgentId, cell: CellId) -> GameResult<()> {
        if !self.graph.contains(cell) {
            return Err(MapError::CellOutOfBounds(cell).into());
        }

        let slot = match agent {
            AgentId::Pacman => &mut self.pacman,
            AgentId::Ghost(index) => self.ghosts.get_mut(index).ok_or(MapError::UnknownGhost(index))?,
        };
        *slot = Agent::new(cell);

        debug!(agent = ?agent, cell, "Agent placed");
        Ok(())
    }

    /// Advances the game by one cell.
    ///
    /// Every moving agent arrives at its planned cell, captures and collectible claims are
    /// resolved, and each agent then plans its next move. When the last collectible is claimed
    /// the next level is set up instead and no moves are planned this tick.
    pub fn tick(&mut self) -> GameResult<Vec<GameEvent>> {
        self.ticks += 1;
        formatter::set_tick(self.ticks);
        let mut events = Vec::new();

        // Agents moving head-on into each other's cells meet on the way
        let passed = self.ghosts.iter().position(|ghost| {
            ghost.cell == self.pacman.destination() && ghost.destination() == self.pacman.cell
        });

        self.pacman.arrive();
        self.ghosts.iter_mut().for_each(|ghost| {
            ghost.arrive();
        });

        let caught = passed.or_else(|| self.ghosts.iter().position(|ghost| ghost.cell == self.pacman.cell));
        if let Some(index) = caught {
            let caught_at = self.pacman.cell;
            let occupied: SmallVec<[CellId; 4]> = self.ghosts.iter().map(|ghost| ghost.cell).collect();
            self.pacman = Agent::new(spawn_cell(&self.graph, &mut self.rng, &occupied)?);
            debug!(
                cell = caught_at,
                grid = %self.graph.cell_to_grid(caught_at),
                ghost = index,
                respawn = self.pacman.cell,
                "Pac-Man caught"
            );
            events.push(GameEvent::PursuedCaught {
                cell: caught_at,
                ghost: index,
            });
        }

        // Arrival side effects happen before any new plan is made
        if self.collectibles.remove(&self.pacman.cell) {
            self.score += 1;
            trace!(cell = self.pacman.cell, score = self.score, remaining = self.collectibles.len(), "Collectible claimed");
            events.push(GameEvent::CollectibleClaimed {
                cell: self.pacman.cell,
                remaining: self.collectibles.len(),
            });
        }

        if self.collectibles.is_empty() {
            self.advance_level()?;
            events.push(GameEvent::LevelAdvanced { level: self.level });
            return Ok(events);
        }

        let depth = self.config.search_depth;
        let origin = self.pacman.cell;
        let ghost_cells: SmallVec<[CellId; 4]> = self.ghosts.iter().map(|ghost| ghost.cell).collect();
        let mut planner = PursuitPlanner::new(&self.graph, &self.collectibles, origin);

        enter(&mut self.pacman, AgentId::Pacman, AgentPhase::Planning { origin });
        let next = planner.plan_pursued_move(origin, &ghost_cells, depth);
        enter(&mut self.pacman, AgentId::Pacman, AgentPhase::Moving { to: next });
        events.push(GameEvent::MovePlanned {
            agent: AgentId::Pacman,
            from: origin,
            to: next,
            randomized: false,
        });

        for (index, ghost) in self.ghosts.iter_mut().enumerate() {
            let from = ghost.cell;
            enter(ghost, AgentId::Ghost(index), AgentPhase::Planning { origin: from });
            let planned = planner.plan_pursuer_move(origin, from, depth);

            let randomized = self.rng.random::<f64>() < self.config.pursuer_random_move_chance;
            let to = if randomized {
                self.graph.neighbors(from).choose(&mut self.rng).copied().unwrap_or(from)
            } else {
                planned
            };

            enter(ghost, AgentId::Ghost(index), AgentPhase::Moving { to });
            events.push(GameEvent::MovePlanned {
                agent: AgentId::Ghost(index),
                from,
                to,
                randomized,
            });
        }

        let stats = planner.stats();
        self.stats.nodes += stats.nodes;
        self.stats.leaves += stats.leaves;

        Ok(events)
    }

    /// Moves on to the next level: one more ghost, a fresh maze and a full set of collectibles.
    fn advance_level(&mut self) -> GameResult<()> {
        self.level += 1;
        self.score = 0;
        self.graph = MazeGraph::new(self.config.rows, self.config.columns, &self.config.maze)?;

        let (pacman, ghosts, collectibles) = populate(&self.graph, &mut self.rng, self.level)?;
        self.pacman = pacman;
        self.ghosts = ghosts;
        self.collectibles = collectibles;

        info!(
            level = self.level,
            ghosts = self.ghosts.len(),
            collectibles = self.collectibles.len(),
            "Level advanced"
        );
        Ok(())
    }
}

/// Spawns Pac-Man and `level` ghosts on distinct open cells and fills every other open cell
/// with a collectible.
fn populate<R: Rng + ?Sized>(
    graph: &MazeGraph,
    rng: &mut R,
    level: u32,
) -> Result<(Agent, Ghosts, BTreeSet<CellId>), MapError> {
    let pacman = spawn_cell(graph, rng, &[])?;

    let mut occupied = vec![pacman];
    for _ in 0..level {
        let cell = spawn_cell(graph, rng, &occupied)?;
        occupied.push(cell);
    }

    let collectibles = graph.open_cells().into_iter().filter(|&cell| cell != pacman).collect();
    let ghosts = occupied[1..].iter().map(|&cell| Agent::new(cell)).collect();

    Ok((Agent::new(pacman), ghosts, collectibles))
}

fn enter(agent: &mut Agent, id: AgentId, phase: AgentPhase) {
    trace!(agent = ?id, cell = agent.cell, from = agent.phase.as_ref(), to = phase.as_ref(), "Phase transition");
    agent.phase = phase;
}
