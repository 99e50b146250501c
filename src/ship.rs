//! Ship definitions: fixed-length linear occupancy with per-cell hit tracking.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;
use crate::location::{Direction, Location};

/// Occupancy mask sized for the standard board.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on the board. Its cells are `origin + i * unit` for
/// `i in 0..length`, where `unit` points right or down.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Location,
    mask: BB,
    hits: BB,
}

impl Ship {
    /// Place a ship at `origin` facing `orientation`. Fails when any segment
    /// would leave the board.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        origin: Location,
    ) -> Result<Self, BoardError> {
        let (_, forward) = Direction::along(orientation);
        let mut mask = BB::new();
        for i in 0..ship_type.length() {
            let cell = origin
                .offset(forward, i)
                .ok_or(BoardError::ShipOutOfBounds)?;
            mask.set(cell.row(), cell.col())?;
        }
        Ok(Ship {
            ship_type,
            orientation,
            origin,
            mask,
            hits: BB::new(),
        })
    }

    /// Register a shot at `loc`. Returns `true` if it struck this ship.
    pub fn register_hit(&mut self, loc: Location) -> bool {
        if self.contains(loc) {
            // in bounds by construction of `Location`
            let _ = self.hits.set(loc.row(), loc.col());
            true
        } else {
            false
        }
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.mask.get(loc.row(), loc.col()).unwrap_or(false)
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.ship_type.length()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Occupied cells, from the origin outward.
    pub fn cells(&self) -> impl Iterator<Item = Location> + '_ {
        let (_, forward) = Direction::along(self.orientation);
        (0..self.ship_type.length()).filter_map(move |i| self.origin.offset(forward, i))
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    pub fn origin(&self) -> Location {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn mask(&self) -> BB {
        self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.hits.count_ones(),
            self.ship_type.length(),
        )
    }
}
