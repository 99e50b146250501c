//! Board coordinates and the moves between them.

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

const SIZE: usize = BOARD_SIZE as usize;

/// A cell on the 10×10 board. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Location {
    row: usize,
    col: usize,
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The backward and forward directions along an axis.
    pub fn along(orientation: Orientation) -> (Direction, Direction) {
        match orientation {
            Orientation::Horizontal => (Direction::Left, Direction::Right),
            Orientation::Vertical => (Direction::Up, Direction::Down),
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl Location {
    /// Bounds-checked constructor.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Location { row, col }))
    }

    /// The neighbouring cell in `dir`, or `None` past the edge.
    pub fn step(&self, dir: Direction) -> Option<Location> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Location::new(row, col)
    }

    /// The cell `distance` steps away in `dir`, or `None` past the edge.
    pub fn offset(&self, dir: Direction, distance: usize) -> Option<Location> {
        let (dr, dc) = dir.delta();
        let row = self.row.checked_add_signed(dr * distance as isize)?;
        let col = self.col.checked_add_signed(dc * distance as isize)?;
        Location::new(row, col)
    }

    /// In-bounds orthogonal neighbours in up, right, down, left order.
    pub fn neighbors(&self) -> impl Iterator<Item = Location> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// True when `other` shares an edge with this cell.
    pub fn is_adjacent(&self, other: &Location) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Checkerboard class used by hunt mode.
    pub fn is_even(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

/// Formats as `A1`..`J10`: column letter then 1-based row.
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row + 1)
    }
}

/// Error returned when a coordinate string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLocationError;

impl fmt::Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a coordinate such as A1 or J10")
    }
}

impl FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_ch = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        if !col_ch.is_ascii_uppercase() {
            return Err(ParseLocationError);
        }
        let col = (col_ch as u8 - b'A') as usize;
        let row: usize = chars.as_str().parse().map_err(|_| ParseLocationError)?;
        if row == 0 {
            return Err(ParseLocationError);
        }
        Location::new(row - 1, col).ok_or(ParseLocationError)
    }
}
