//! The eight compass directions a word can run in.

use std::fmt;

use wordfog_core::GridPos;

/// A placement direction on the grid.
///
/// Deltas are expressed as `(d_col, d_row)` with columns growing east
/// and rows growing south, so [`Direction::South`] is `(0, 1)` and
/// [`Direction::North`] is `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    East,
    /// Top to bottom.
    South,
    /// Diagonally down-right.
    SouthEast,
    /// Diagonally up-right.
    NorthEast,
    /// Right to left.
    West,
    /// Bottom to top.
    North,
    /// Diagonally up-left.
    NorthWest,
    /// Diagonally down-left.
    SouthWest,
}

impl Direction {
    /// Every direction, in the order candidate searches walk them.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::South,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::West,
        Direction::North,
        Direction::NorthWest,
        Direction::SouthWest,
    ];

    /// The unit step for this direction as `(d_col, d_row)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::NorthEast => (1, -1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthWest => (-1, 1),
        }
    }

    /// The direction that takes one step from `from` to `to`, if the
    /// two cells are exactly one king move apart.
    pub fn between(from: GridPos, to: GridPos) -> Option<Direction> {
        let delta = (to.col - from.col, to.row - from.row);
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }

    /// The cell `steps` unit moves from `start` along this direction.
    pub const fn step_from(self, start: GridPos, steps: i32) -> GridPos {
        let (d_col, d_row) = self.delta();
        start.offset(d_col * steps, d_row * steps)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Direction::East => "E",
            Direction::South => "S",
            Direction::SouthEast => "SE",
            Direction::NorthEast => "NE",
            Direction::West => "W",
            Direction::North => "N",
            Direction::NorthWest => "NW",
            Direction::SouthWest => "SW",
        };
        write!(f, "{code}")
    }
}
