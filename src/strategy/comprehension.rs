//! Constraint-propagation strategy.
//!
//! Before every shot two deduction passes run over the knowledge grid:
//!
//! 1. A hit whose struck run is closed off on all four sides by misses, sunk
//!    cells or the edge cannot grow any further, so it belongs to a ship that
//!    has already gone down (`SunkUnknownShip`).
//! 2. A struck run along one axis, extended through unknown cells up to the
//!    nearest barrier, is attributed to a ship when exactly one remaining ship
//!    fits in it and that ship fills it. The run becomes `SunkConfirmed`, its
//!    unknown cells are queued as priority targets and the length is retired.
//!
//! A `Sunk` report settles the matching deduction, or retires the reported
//! length directly. Deductions it contradicts are revoked.
//!
//! Priority cells are shot first. Otherwise the strategy aims at the hottest
//! cell around existing hits, and failing that at the hottest open cell.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::rngs::SmallRng;

use super::{glyphs, ShipsLeft, Strategy, StrategyKind};
use crate::common::{AttackResult, StrategyError};
use crate::grid::{CellState, Deduction, Grid};
use crate::heat::{self, HeatMap};
use crate::location::{Direction, Location};
use crate::ship::{Orientation, BB};

/// Where a deduced ship stands against what the opponent later reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Standing {
    /// Length retired on deduction alone.
    Pending,
    /// A `Sunk` report named exactly these cells.
    Settled,
    /// Contradicted; the length went back into the multiset.
    Revoked,
}

/// A run attributed to one ship by deduction. `prior` holds each cell's state
/// from before it was marked `SunkConfirmed`.
#[derive(Debug, Clone)]
struct Confirmation {
    cells: Vec<Location>,
    prior: Vec<Deduction>,
    length: usize,
    standing: Standing,
}

#[derive(Debug, Clone)]
pub struct ComprehensionStrategy {
    grid: Grid<Deduction>,
    attacked: BB,
    ships_left: ShipsLeft,
    priority: VecDeque<Location>,
    confirmations: Vec<Confirmation>,
    hits_heat_map: HeatMap,
    unknown_heat_map: HeatMap,
}

impl ComprehensionStrategy {
    pub fn new() -> Self {
        Self::with_ships_left(ShipsLeft::standard())
    }

    /// Start from a custom remaining-ship multiset.
    pub fn with_ships_left(ships_left: ShipsLeft) -> Self {
        Self {
            grid: Grid::new(),
            attacked: BB::new(),
            ships_left,
            priority: VecDeque::new(),
            confirmations: Vec::new(),
            hits_heat_map: HeatMap::filled(0),
            unknown_heat_map: HeatMap::filled(0),
        }
    }

    pub fn knowledge(&self) -> &Grid<Deduction> {
        &self.grid
    }

    pub fn ships_left(&self) -> &ShipsLeft {
        &self.ships_left
    }

    /// Cells deduced to hold a ship segment, next first.
    pub fn priority_cells(&self) -> impl Iterator<Item = Location> + '_ {
        self.priority.iter().copied()
    }

    pub fn hits_heat_map(&self) -> &HeatMap {
        &self.hits_heat_map
    }

    pub fn unknown_heat_map(&self) -> &HeatMap {
        &self.unknown_heat_map
    }

    /// Lengths retired by deduction that no `Sunk` report has settled yet.
    pub fn deduced_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.confirmations
            .iter()
            .filter(|c| c.standing == Standing::Pending)
            .map(|c| c.length)
    }

    /// Run both deduction passes. `choose_attack` does this first.
    pub fn deduce(&mut self) {
        self.mark_sunk_from_surroundings();
        self.mark_confirmed_sunk();
    }

    fn mark_sunk_from_surroundings(&mut self) {
        for loc in Location::all() {
            if self.grid.get(loc) != Deduction::Hit {
                continue;
            }
            if Direction::ALL.into_iter().all(|dir| self.is_bounded(loc, dir)) {
                log::trace!("{} is boxed in; marking as sunk", loc);
                self.grid.set(loc, Deduction::SunkUnknownShip);
            }
        }
    }

    /// True if the struck run from `loc` in `dir` ends at the edge or at an
    /// attacked cell.
    fn is_bounded(&self, loc: Location, dir: Direction) -> bool {
        let run = heat::run_length(&self.grid, loc, dir, usize::MAX, Deduction::is_struck);
        match loc.offset(dir, run + 1) {
            None => true,
            Some(end) => !self.grid.get(end).is_unknown(),
        }
    }

    fn mark_confirmed_sunk(&mut self) {
        for loc in Location::all() {
            if !self.grid.get(loc).is_struck() {
                continue;
            }
            let Some(orientation) = self.ship_axis(loc) else {
                continue;
            };
            let (start, size) =
                self.extent(loc, orientation, |s: Deduction| s.is_struck() || s.is_unknown());
            if self.ships_left.unique_fit(size) != Some(size) {
                continue;
            }

            let (_, forward) = Direction::along(orientation);
            let cells: Vec<Location> = (0..size)
                .filter_map(|i| start.offset(forward, i))
                .collect();
            let prior: Vec<Deduction> = cells.iter().map(|&cell| self.grid.get(cell)).collect();
            for &cell in &cells {
                if self.grid.get(cell).is_unknown() {
                    self.priority.push_back(cell);
                }
                self.grid.set(cell, Deduction::SunkConfirmed);
            }
            self.ships_left.retire(size);
            log::debug!(
                "confirmed ship of length {} from {}; remaining {:?}",
                size,
                start,
                self.ships_left.lengths()
            );
            self.confirmations.push(Confirmation {
                cells,
                prior,
                length: size,
                standing: Standing::Pending,
            });
        }
    }

    /// Axis along which the ship through `loc` must lie, or `None` when hits
    /// cross or the open space leaves both axes possible.
    fn ship_axis(&self, loc: Location) -> Option<Orientation> {
        let (_, width) = self.extent(loc, Orientation::Horizontal, Deduction::is_struck);
        let (_, height) = self.extent(loc, Orientation::Vertical, Deduction::is_struck);
        match (width > 1, height > 1) {
            (true, true) => None,
            (true, false) => Some(Orientation::Horizontal),
            (false, true) => Some(Orientation::Vertical),
            (false, false) => {
                let extensible = |s: Deduction| s.is_struck() || s.is_unknown();
                let (_, width) = self.extent(loc, Orientation::Horizontal, extensible);
                let (_, height) = self.extent(loc, Orientation::Vertical, extensible);
                match (width > 1, height > 1) {
                    (true, true) | (false, false) => None,
                    (true, false) => Some(Orientation::Horizontal),
                    (false, true) => Some(Orientation::Vertical),
                }
            }
        }
    }

    /// First cell and length of the maximal run through `loc` along
    /// `orientation` whose cells satisfy `passable`.
    fn extent(
        &self,
        loc: Location,
        orientation: Orientation,
        passable: impl Fn(Deduction) -> bool + Copy,
    ) -> (Location, usize) {
        let (back_dir, fwd_dir) = Direction::along(orientation);
        let back = heat::run_length(&self.grid, loc, back_dir, usize::MAX, passable);
        let forward = heat::run_length(&self.grid, loc, fwd_dir, usize::MAX, passable);
        let start = loc.offset(back_dir, back).unwrap_or(loc);
        (start, back + forward + 1)
    }

    fn hottest_near_hits(&mut self, rng: &mut SmallRng) -> Option<Location> {
        let mut map = HeatMap::filled(0);
        heat::add_hit_heat(
            &mut map,
            &self.grid,
            self.ships_left.lengths(),
            1,
            |s: Deduction| s == Deduction::Hit,
            |s: Deduction| s.is_struck() || s.is_unknown(),
        );
        self.hits_heat_map = map;
        if heat::total(&self.hits_heat_map) == 0 {
            return None;
        }
        heat::pick_hottest(&self.hits_heat_map, &self.grid, rng)
    }

    fn hottest_open_cell(&mut self, rng: &mut SmallRng) -> Option<Location> {
        self.unknown_heat_map = heat::open_space_heat(&self.grid, self.ships_left.lengths());
        heat::pick_hottest(&self.unknown_heat_map, &self.grid, rng)
    }

    /// Fold a `Sunk` report carrying the ship's cells into the grid and the
    /// multiset. A deduction covering exactly these cells already retired the
    /// length. Deductions that overlap them any other way were wrong and are
    /// revoked first.
    fn settle_sunk(&mut self, ship_cells: &[Location]) -> Result<(), StrategyError> {
        let length = ship_cells.len();
        let mut settled = false;
        for idx in 0..self.confirmations.len() {
            let c = &self.confirmations[idx];
            if c.standing != Standing::Pending
                || !c.cells.iter().any(|cell| ship_cells.contains(cell))
            {
                continue;
            }
            let same_ship =
                c.length == length && c.cells.iter().all(|cell| ship_cells.contains(cell));
            if same_ship && !settled {
                self.confirmations[idx].standing = Standing::Settled;
                settled = true;
            } else {
                self.revoke(idx);
            }
        }

        for &cell in ship_cells {
            self.grid.set(cell, Deduction::SunkConfirmed);
        }
        if settled {
            return Ok(());
        }
        if !self.ships_left.retire(length) {
            // A deduction elsewhere took this length; it cannot be right.
            let wrong = self
                .confirmations
                .iter()
                .position(|c| c.standing == Standing::Pending && c.length == length);
            match wrong {
                Some(idx) => {
                    self.revoke(idx);
                    self.ships_left.retire(length);
                }
                None => {
                    log::warn!("sunk ship of length {} was not afloat", length);
                    return Err(StrategyError::UnknownShipLength(length));
                }
            }
        }
        log::debug!(
            "sunk ship of length {}; remaining {:?}",
            length,
            self.ships_left.lengths()
        );
        Ok(())
    }

    /// Sinking shot without cell data: retire the sunk ship when the struck
    /// run through `target` leaves only one candidate length.
    fn retire_sunk_at(&mut self, target: Location) {
        let (h_start, width) = self.extent(target, Orientation::Horizontal, Deduction::is_struck);
        let (v_start, height) = self.extent(target, Orientation::Vertical, Deduction::is_struck);
        if width > 1 && height > 1 {
            return;
        }
        let (start, size, orientation) = if width > 1 {
            (h_start, width, Orientation::Horizontal)
        } else {
            (v_start, height, Orientation::Vertical)
        };
        let Some(length) = self.ships_left.unique_fit(size) else {
            return;
        };
        self.ships_left.retire(length);
        if length == size {
            let (_, forward) = Direction::along(orientation);
            for cell in (0..size).filter_map(|i| start.offset(forward, i)) {
                self.grid.set(cell, Deduction::SunkConfirmed);
            }
        }
        log::debug!(
            "sinking shot at {} retires length {}; remaining {:?}",
            target,
            length,
            self.ships_left.lengths()
        );
    }

    /// Undo confirmation `idx`: its length goes back into play and cells that
    /// were struck when it was made regain their struck state. Cells hit only
    /// after the deduction come back as plain hits.
    fn revoke(&mut self, idx: usize) {
        let c = &mut self.confirmations[idx];
        c.standing = Standing::Revoked;
        self.ships_left.restore(c.length);
        for (&cell, &prior) in c.cells.iter().zip(&c.prior) {
            if self.grid.get(cell) != Deduction::SunkConfirmed {
                continue;
            }
            let attacked = self.attacked.get(cell.row(), cell.col()).unwrap_or(false);
            if prior.is_struck() {
                self.grid.set(cell, prior);
            } else if attacked {
                self.grid.set(cell, Deduction::Hit);
            }
        }
        log::warn!(
            "deduced ship of length {} was wrong; restoring it",
            self.confirmations[idx].length
        );
    }

    /// True when a standing deduction or a reported sinking covers `cell`.
    fn is_claimed(&self, cell: Location) -> bool {
        self.confirmations
            .iter()
            .any(|c| c.standing != Standing::Revoked && c.cells.contains(&cell))
    }

    /// A priority cell came back empty: the run it was deduced from belonged
    /// to something else.
    fn revoke_confirmation(&mut self, target: Location) {
        if let Some(idx) = self
            .confirmations
            .iter()
            .position(|c| c.standing == Standing::Pending && c.cells.contains(&target))
        {
            self.revoke(idx);
        }
    }
}

impl Default for ComprehensionStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for ComprehensionStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Comprehension
    }

    fn choose_attack(&mut self, rng: &mut SmallRng) -> Result<Location, StrategyError> {
        self.deduce();

        while let Some(loc) = self.priority.pop_front() {
            if !self.attacked.get(loc.row(), loc.col()).unwrap_or(true) {
                log::trace!("priority target {}", loc);
                return Ok(loc);
            }
        }

        if let Some(loc) = self.hottest_near_hits(rng) {
            return Ok(loc);
        }
        self.hottest_open_cell(rng)
            .ok_or(StrategyError::NoTargetAvailable)
    }

    fn report_result(
        &mut self,
        target: Location,
        result: &AttackResult,
    ) -> Result<(), StrategyError> {
        let prior = self.grid.get(target);
        let fresh = prior.is_unknown() || prior == Deduction::SunkConfirmed;
        if self.attacked.get(target.row(), target.col()).unwrap_or(true) || !fresh {
            log::warn!("result reported for already-attacked cell {}", target);
            return Err(StrategyError::RepeatedAttack(target));
        }
        // in bounds by construction of `Location`
        let _ = self.attacked.set(target.row(), target.col());

        let confirmed = prior == Deduction::SunkConfirmed;
        match result {
            AttackResult::Miss => {
                if confirmed {
                    self.revoke_confirmation(target);
                }
                self.grid.set(target, Deduction::Miss);
            }
            AttackResult::Hit => {
                if !self.is_claimed(target) {
                    self.grid.set(target, Deduction::Hit);
                }
            }
            AttackResult::Sunk { ship_cells, .. } if !ship_cells.is_empty() => {
                self.settle_sunk(ship_cells)?;
                if self.grid.get(target).is_unknown() {
                    self.grid.set(target, Deduction::Hit);
                }
            }
            AttackResult::Sunk { .. } => {
                if !confirmed {
                    self.grid.set(target, Deduction::SunkUnknownShip);
                    self.retire_sunk_at(target);
                }
            }
        }
        Ok(())
    }

    fn knowledge_glyphs(&self) -> Grid<char> {
        glyphs(&self.grid)
    }
}
