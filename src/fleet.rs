//! A player's own fleet: placement, legality rules and resolution of incoming
//! attacks.

use rand::Rng;

use crate::common::{AttackResult, BoardError};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS, SHIPS};
use crate::location::Location;
use crate::ship::{Orientation, Ship, BB};

/// Legality check applied when adding a ship to a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum PlacementRule {
    /// In bounds and no shared cells.
    #[default]
    Basic,
    /// Basic, and no cell orthogonally adjacent to another ship.
    Strict,
}

/// The five ships belonging to one player plus the shots fired at them.
#[derive(Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: BB,
    shots: BB,
}

impl Fleet {
    /// Create an empty fleet (no ships placed).
    pub fn new() -> Self {
        Fleet {
            ships: [None; NUM_SHIPS],
            ship_map: BB::new(),
            shots: BB::new(),
        }
    }

    /// Generate a full fleet by rejection sampling each ship in `SHIPS` order.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, rule: PlacementRule) -> Result<Self, BoardError> {
        let mut fleet = Fleet::new();
        for i in 0..NUM_SHIPS {
            let (origin, orientation) = fleet.random_placement(rng, i, rule)?;
            fleet.place(i, origin, orientation, rule)?;
        }
        log::debug!("placed fleet under {:?} rule", rule);
        Ok(fleet)
    }

    /// Place ship `ship_index` of `SHIPS` at `origin`.
    pub fn place(
        &mut self,
        ship_index: usize,
        origin: Location,
        orientation: Orientation,
        rule: PlacementRule,
    ) -> Result<(), BoardError> {
        let slot = self.ships.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        if slot.is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(SHIPS[ship_index], orientation, origin)?;
        self.check(&ship, rule)?;
        self.ship_map |= ship.mask();
        self.ships[ship_index] = Some(ship);
        Ok(())
    }

    /// Whether `ship` could join this fleet under `rule`.
    pub fn check(&self, ship: &Ship, rule: PlacementRule) -> Result<(), BoardError> {
        let mask = ship.mask();
        if mask.intersects(&self.ship_map) {
            return Err(BoardError::ShipOverlaps);
        }
        if rule == PlacementRule::Strict && mask.intersects(&self.ship_map.orthogonal_halo()) {
            return Err(BoardError::ShipAdjacent);
        }
        Ok(())
    }

    /// Sample uniformly random origins and orientations for `ship_index` until
    /// one passes `rule`, giving up after `MAX_PLACEMENT_ATTEMPTS`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_index: usize,
        rule: PlacementRule,
    ) -> Result<(Location, Orientation), BoardError> {
        let def = *SHIPS.get(ship_index).ok_or(BoardError::InvalidIndex)?;
        let size = BOARD_SIZE as usize;
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Location::new(rng.random_range(0..size), rng.random_range(0..size))
                .ok_or(BoardError::ShipOutOfBounds)?;
            let ship = match Ship::new(def, orientation, origin) {
                Ok(ship) => ship,
                Err(BoardError::ShipOutOfBounds) => continue,
                Err(e) => return Err(e),
            };
            if self.check(&ship, rule).is_ok() {
                return Ok((origin, orientation));
            }
        }
        log::warn!("gave up placing {} under {:?} rule", def.name(), rule);
        Err(BoardError::UnableToPlaceShip {
            ship: def.name(),
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Resolve an incoming shot at `loc`.
    pub fn receive_attack(&mut self, loc: Location) -> Result<AttackResult, BoardError> {
        if self.shots.get(loc.row(), loc.col())? {
            return Err(BoardError::AlreadyGuessed(loc));
        }
        self.shots.set(loc.row(), loc.col())?;
        if !self.ship_map.get(loc.row(), loc.col())? {
            return Ok(AttackResult::Miss);
        }
        let ship = self
            .ships
            .iter_mut()
            .flatten()
            .find(|ship| ship.contains(loc))
            .ok_or(BoardError::UnknownShipHit(loc))?;
        ship.register_hit(loc);
        if ship.is_sunk() {
            log::debug!("{} sunk by shot at {}", ship.name(), loc);
            Ok(AttackResult::Sunk {
                name: ship.name(),
                ship_cells: ship.cells().collect(),
            })
        } else {
            Ok(AttackResult::Hit)
        }
    }

    /// True once every placed ship has been sunk. An empty fleet is never
    /// considered sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships().next().is_some() && self.ships().all(|ship| ship.is_sunk())
    }

    /// True when every ship of the standard fleet has been placed.
    pub fn is_complete(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn ship_at(&self, loc: Location) -> Option<&Ship> {
        self.ships().find(|ship| ship.contains(loc))
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Cells that have been fired upon.
    pub fn shots(&self) -> BB {
        self.shots
    }

    pub fn was_attacked(&self, loc: Location) -> bool {
        self.shots.get(loc.row(), loc.col()).unwrap_or(false)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Fleet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Fleet")
            .field("ships", &self.ships)
            .field("shots", &self.shots.count_ones())
            .finish()
    }
}
