//! Hunt-and-target: random checkerboard shots until something is hit, then
//! work through the hit's neighbours.
//!
//! Every ship is at least two cells long, so each one covers at least one
//! cell with `(row + col)` even. Hunting only that class halves the search.
//! The frontier is never pruned when a ship sinks; leftover neighbours are
//! simply shot at.

use alloc::collections::VecDeque;

use rand::rngs::SmallRng;

use super::random::record_mark;
use super::{glyphs, random_unknown, Strategy, StrategyKind};
use crate::common::{AttackResult, StrategyError};
use crate::grid::{CellState, Grid, Mark};
use crate::location::Location;

#[derive(Debug, Clone, Default)]
pub struct HuntTargetStrategy {
    grid: Grid<Mark>,
    frontier: VecDeque<Location>,
}

impl HuntTargetStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn knowledge(&self) -> &Grid<Mark> {
        &self.grid
    }

    /// Cells queued for target mode, next first.
    pub fn frontier(&self) -> impl Iterator<Item = Location> + '_ {
        self.frontier.iter().copied()
    }

    fn hunt(&self, rng: &mut SmallRng) -> Option<Location> {
        // Parity class exhausted: any unattacked cell will do.
        random_unknown(&self.grid, rng, |loc| loc.is_even())
            .or_else(|| random_unknown(&self.grid, rng, |_| true))
    }
}

impl Strategy for HuntTargetStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::HuntTarget
    }

    fn choose_attack(&mut self, rng: &mut SmallRng) -> Result<Location, StrategyError> {
        while let Some(loc) = self.frontier.pop_front() {
            if self.grid.get(loc).is_unknown() {
                log::trace!("target mode: {}", loc);
                return Ok(loc);
            }
        }
        self.hunt(rng).ok_or(StrategyError::NoTargetAvailable)
    }

    fn report_result(
        &mut self,
        target: Location,
        result: &AttackResult,
    ) -> Result<(), StrategyError> {
        record_mark(&mut self.grid, target, result)?;
        if result.is_hit() {
            for next in target.neighbors() {
                if self.grid.get(next).is_unknown() && !self.frontier.contains(&next) {
                    self.frontier.push_back(next);
                }
            }
        }
        Ok(())
    }

    fn knowledge_glyphs(&self) -> Grid<char> {
        glyphs(&self.grid)
    }
}
