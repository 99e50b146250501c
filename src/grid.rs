//! Knowledge grids: a strategy's private view of the opponent's board.

use crate::config::BOARD_SIZE;
use crate::location::Location;

const SIZE: usize = BOARD_SIZE as usize;

/// A cell value with a distinguished "not yet attacked" state.
pub trait CellState: Copy + PartialEq {
    const UNKNOWN: Self;

    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    /// Single-character rendering for board dumps.
    fn glyph(self) -> char;
}

/// Three-state view used by the random and hunt-and-target strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Mark {
    Empty,
    Hit,
    Miss,
}

impl CellState for Mark {
    const UNKNOWN: Self = Mark::Empty;

    fn glyph(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Hit => 'X',
            Mark::Miss => 'o',
        }
    }
}

/// Four-state view used by the probability-density strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum SeaState {
    Unknown,
    Miss,
    Hit,
    Sunk,
}

impl CellState for SeaState {
    const UNKNOWN: Self = SeaState::Unknown;

    fn glyph(self) -> char {
        match self {
            SeaState::Unknown => '.',
            SeaState::Miss => 'o',
            SeaState::Hit => 'X',
            SeaState::Sunk => '#',
        }
    }
}

/// Five-state view used by the constraint-propagation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Deduction {
    Unknown,
    Miss,
    Hit,
    /// Part of some sunk ship whose extent is not yet attributed.
    SunkUnknownShip,
    /// Part of a sunk ship whose full extent is known.
    SunkConfirmed,
}

impl Deduction {
    /// Cells a ship run may pass through when measuring extents.
    pub fn is_struck(self) -> bool {
        matches!(self, Deduction::Hit | Deduction::SunkUnknownShip)
    }
}

impl CellState for Deduction {
    const UNKNOWN: Self = Deduction::Unknown;

    fn glyph(self) -> char {
        match self {
            Deduction::Unknown => '.',
            Deduction::Miss => 'o',
            Deduction::Hit => 'X',
            Deduction::SunkUnknownShip => '?',
            Deduction::SunkConfirmed => '#',
        }
    }
}

/// Fixed 10×10 buffer indexed by `Location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Grid<T> {
    cells: [[T; SIZE]; SIZE],
}

impl<T: Copy> Grid<T> {
    pub fn filled(value: T) -> Self {
        Grid {
            cells: [[value; SIZE]; SIZE],
        }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> T {
        self.cells[loc.row()][loc.col()]
    }

    #[inline]
    pub fn set(&mut self, loc: Location, value: T) {
        self.cells[loc.row()][loc.col()] = value;
    }

    pub fn rows(&self) -> &[[T; SIZE]; SIZE] {
        &self.cells
    }

    /// Every cell with its value, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Location, T)> + '_ {
        Location::all().map(move |loc| (loc, self.get(loc)))
    }
}

impl<T: CellState> Grid<T> {
    pub fn new() -> Self {
        Self::filled(T::UNKNOWN)
    }

    /// Cells that have not been attacked yet.
    pub fn unknown_cells(&self) -> impl Iterator<Item = Location> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_unknown())
            .map(|(loc, _)| loc)
    }
}

impl<T: CellState> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}
