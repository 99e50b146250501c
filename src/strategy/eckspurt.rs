//! Probability-density strategy.
//!
//! Offense sums two passes into one heat map each turn: an open-space count of
//! placements for every remaining ship through each unknown cell, and a large
//! fixed bonus on unknown cells that could complete a ship around a known hit.
//! Defense places its own fleet so that no two ships touch.

use rand::rngs::SmallRng;
use rand::Rng;

use super::{ensure_unattacked, glyphs, ShipsLeft, Strategy, StrategyKind};
use crate::common::{AttackResult, BoardError, StrategyError};
use crate::config::HIT_WEIGHT;
use crate::fleet::{Fleet, PlacementRule};
use crate::grid::{Grid, SeaState};
use crate::heat::{self, HeatMap};
use crate::location::Location;

#[derive(Debug, Clone)]
pub struct EckspurtStrategy {
    grid: Grid<SeaState>,
    ships_left: ShipsLeft,
    shots: usize,
    last_heat_map: HeatMap,
}

impl EckspurtStrategy {
    pub fn new() -> Self {
        Self::with_ships_left(ShipsLeft::standard())
    }

    /// Start from a custom remaining-ship multiset.
    pub fn with_ships_left(ships_left: ShipsLeft) -> Self {
        Self {
            grid: Grid::new(),
            ships_left,
            shots: 0,
            last_heat_map: HeatMap::filled(0),
        }
    }

    /// Own fleet with no two ships orthogonally adjacent.
    pub fn create_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Fleet, BoardError> {
        Fleet::random(rng, PlacementRule::Strict)
    }

    /// Heat map for the current knowledge, without choosing a cell.
    pub fn heat_map(&self) -> HeatMap {
        let lengths = self.ships_left.lengths();
        let mut map = heat::open_space_heat(&self.grid, lengths);
        heat::add_hit_heat(
            &mut map,
            &self.grid,
            lengths,
            HIT_WEIGHT,
            |s: SeaState| s == SeaState::Hit,
            |s: SeaState| matches!(s, SeaState::Hit | SeaState::Unknown),
        );
        map
    }

    pub fn knowledge(&self) -> &Grid<SeaState> {
        &self.grid
    }

    pub fn ships_left(&self) -> &ShipsLeft {
        &self.ships_left
    }

    /// The map behind the most recent `choose_attack`.
    pub fn last_heat_map(&self) -> &HeatMap {
        &self.last_heat_map
    }

    /// Number of results folded in so far.
    pub fn shots(&self) -> usize {
        self.shots
    }
}

impl Default for EckspurtStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for EckspurtStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Eckspurt
    }

    fn choose_attack(&mut self, rng: &mut SmallRng) -> Result<Location, StrategyError> {
        self.last_heat_map = self.heat_map();
        let target = heat::pick_hottest(&self.last_heat_map, &self.grid, rng)
            .ok_or(StrategyError::NoTargetAvailable)?;
        log::trace!(
            "eckspurt targets {} (weight {})",
            target,
            self.last_heat_map.get(target)
        );
        Ok(target)
    }

    fn report_result(
        &mut self,
        target: Location,
        result: &AttackResult,
    ) -> Result<(), StrategyError> {
        ensure_unattacked(&self.grid, target)?;
        self.shots += 1;
        match result {
            AttackResult::Miss => self.grid.set(target, SeaState::Miss),
            AttackResult::Hit => self.grid.set(target, SeaState::Hit),
            AttackResult::Sunk { name, ship_cells } => {
                self.grid.set(target, SeaState::Sunk);
                for &cell in ship_cells {
                    self.grid.set(cell, SeaState::Sunk);
                }
                let length = ship_cells.len();
                if !self.ships_left.retire(length) {
                    log::warn!("sunk {} of length {} was not afloat", name, length);
                    return Err(StrategyError::UnknownShipLength(length));
                }
                log::debug!(
                    "eckspurt sank {}; remaining {:?}",
                    name,
                    self.ships_left.lengths()
                );
            }
        }
        Ok(())
    }

    fn placement_rule(&self) -> PlacementRule {
        PlacementRule::Strict
    }

    fn knowledge_glyphs(&self) -> Grid<char> {
        glyphs(&self.grid)
    }
}
