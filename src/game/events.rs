use crate::map::graph::CellId;

/// Identifies an agent on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AgentId {
    Pacman,
    /// A ghost, by its index in spawn order.
    Ghost(usize),
}

/// Something observable that happened during a game tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// An agent chose the next cell to move into.
    MovePlanned {
        agent: AgentId,
        from: CellId,
        to: CellId,
        /// Set when a ghost discarded its planned move for a random one.
        randomized: bool,
    },
    /// Pac-Man arrived on a cell holding a collectible and claimed it.
    CollectibleClaimed { cell: CellId, remaining: usize },
    /// Every collectible was claimed; the board has been rebuilt for the new level.
    LevelAdvanced { level: u32 },
    /// A ghost reached Pac-Man's cell; Pac-Man has been respawned elsewhere.
    PursuedCaught { cell: CellId, ghost: usize },
}
