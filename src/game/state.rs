use std::collections::BTreeSet;

use rand::Rng;
use strum_macros::AsRefStr;

use crate::error::MapError;
use crate::map::graph::{CellId, MazeGraph};

/// Where an agent is in its plan/move cycle.
///
/// `AtRest -> Planning -> Moving -> AtRest`. Collectible claims and level changes are applied on
/// entry to `AtRest`, before the next plan is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum AgentPhase {
    /// Standing on a cell, either freshly spawned or having just arrived.
    AtRest,
    /// A move is being chosen; `origin` is the cell the planning episode started from.
    Planning { origin: CellId },
    /// Travelling towards a planned cell.
    Moving { to: CellId },
}

/// The position and movement state of one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub cell: CellId,
    pub phase: AgentPhase,
}

impl Agent {
    pub fn new(cell: CellId) -> Self {
        Agent {
            cell,
            phase: AgentPhase::AtRest,
        }
    }

    /// The cell the agent is heading to, or its current cell if it is not moving.
    pub fn destination(&self) -> CellId {
        match self.phase {
            AgentPhase::Moving { to } => to,
            _ => self.cell,
        }
    }

    /// Completes a pending move. Returns `true` if the agent arrived somewhere.
    pub fn arrive(&mut self) -> bool {
        match self.phase {
            AgentPhase::Moving { to } => {
                self.cell = to;
                self.phase = AgentPhase::AtRest;
                true
            }
            _ => false,
        }
    }
}

/// Picks a random open cell that no agent in `occupied` is standing on.
///
/// # Errors
///
/// Returns [`MapError::NotEnoughOpenCells`] when every open cell is already taken.
pub fn spawn_cell<R: Rng + ?Sized>(graph: &MazeGraph, rng: &mut R, occupied: &[CellId]) -> Result<CellId, MapError> {
    let taken: BTreeSet<CellId> = occupied.iter().copied().filter(|&cell| !graph.is_wall(cell)).collect();
    if taken.len() >= graph.open_cell_count() {
        return Err(MapError::NotEnoughOpenCells {
            agents: occupied.len() + 1,
            open: graph.open_cell_count(),
        });
    }

    loop {
        let cell = graph.random_open_cell(rng)?;
        if !taken.contains(&cell) {
            return Ok(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_agent_arrive() {
        let mut agent = Agent::new(3);
        assert!(!agent.arrive());

        agent.phase = AgentPhase::Moving { to: 4 };
        assert_eq!(agent.destination(), 4);
        assert!(agent.arrive());
        assert_eq!(agent.cell, 4);
        assert_eq!(agent.phase, AgentPhase::AtRest);
    }

    #[test]
    fn test_spawn_cell_avoids_occupied() {
        let graph = MazeGraph::new(1, 3, "111").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(spawn_cell(&graph, &mut rng, &[0, 2]), Ok(1));
        }
        assert_eq!(
            spawn_cell(&graph, &mut rng, &[0, 1, 2]),
            Err(MapError::NotEnoughOpenCells { agents: 4, open: 3 })
        );
    }
}
