//! Grid coordinates and neighbor directions

use serde::{Deserialize, Serialize};

/// Integer grid position. North is `y - 1`, south is `y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring coordinate one step in `direction`
    ///
    /// `None` past the edge of the `i32` range; such a neighbor is void.
    pub fn neighbor(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The eight neighbor directions around a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    E,
    S,
    W,
    NE,
    SE,
    SW,
    NW,
}

impl Direction {
    /// Cardinals in mask bit order (bit0=N, bit1=E, bit2=S, bit3=W)
    pub const CARDINALS: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// Diagonals in mask bit order (bit0=NE, bit1=SE, bit2=SW, bit3=NW)
    pub const DIAGONALS: [Direction; 4] =
        [Direction::NE, Direction::SE, Direction::SW, Direction::NW];

    /// `(dx, dy)` step for this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::N => (0, -1),
            Direction::E => (1, 0),
            Direction::S => (0, 1),
            Direction::W => (-1, 0),
            Direction::NE => (1, -1),
            Direction::SE => (1, 1),
            Direction::SW => (-1, 1),
            Direction::NW => (-1, -1),
        }
    }
}
