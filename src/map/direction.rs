use glam::IVec2;
use strum_macros::AsRefStr;

/// The four cardinal directions a cell can connect in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The four cardinal directions, in neighbor priority order.
    ///
    /// Adjacency lists, search expansion and minimax tie-breaks all follow this order.
    pub const PRIORITY: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Returns the grid offset of this direction (`x` is the column, `y` the row).
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}
