//! Common types: attack outcomes and the errors raised by fleets and
//! strategies.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoardError;
use crate::location::Location;

/// Outcome of resolving one attack against a fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum AttackResult {
    /// No ship at the attacked cell.
    Miss,
    /// A ship was struck but is still afloat.
    Hit,
    /// The strike sank a ship. Carries every cell the ship occupied so the
    /// attacker can retire it even where it never fired.
    Sunk {
        name: &'static str,
        ship_cells: Vec<Location>,
    },
}

impl AttackResult {
    /// True for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, AttackResult::Miss)
    }
}

/// Errors returned by fleet placement and attack resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Specified ship index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement touches another ship under the strict rule.
    ShipAdjacent,
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Rejection sampling gave up; the board cannot hold the fleet.
    UnableToPlaceShip {
        ship: &'static str,
        attempts: usize,
    },
    /// Shot was already fired at this cell.
    AlreadyGuessed(Location),
    /// Occupancy map and ship list disagree.
    UnknownShipHit(Location),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipAdjacent => write!(f, "Ship placement touches another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip { ship, attempts } => {
                write!(f, "Unable to place {} after {} attempts", ship, attempts)
            }
            BoardError::AlreadyGuessed(loc) => write!(f, "{} was already attacked", loc),
            BoardError::UnknownShipHit(loc) => {
                write!(f, "{} is occupied but no ship claims it", loc)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Invariant violations raised by a strategy. None of these are retryable:
/// the strategy instance is no longer trustworthy once one surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// Every cell has already been attacked.
    NoTargetAvailable,
    /// A result was reported for a cell this strategy had already attacked.
    RepeatedAttack(Location),
    /// A sunk ship's length matches none of the ships still afloat.
    UnknownShipLength(usize),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::NoTargetAvailable => write!(f, "No unattacked cell left to target"),
            StrategyError::RepeatedAttack(loc) => write!(f, "{} was attacked twice", loc),
            StrategyError::UnknownShipLength(len) => {
                write!(f, "Sunk ship of length {} is not among the remaining ships", len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StrategyError {}

/// Failure while driving a game between players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    Strategy(StrategyError),
    /// Every cell was attacked without sinking the fleet.
    TooManyTurns(usize),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl From<StrategyError> for GameError {
    fn from(err: StrategyError) -> Self {
        GameError::Strategy(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::Strategy(e) => write!(f, "Strategy error: {}", e),
            GameError::TooManyTurns(n) => write!(f, "Fleet still afloat after {} shots", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
