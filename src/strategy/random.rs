//! Baseline strategy: attack a uniformly random unattacked cell.

use rand::rngs::SmallRng;

use super::{ensure_unattacked, glyphs, random_unknown, Strategy, StrategyKind};
use crate::common::{AttackResult, StrategyError};
use crate::grid::{Grid, Mark};
use crate::location::Location;

#[derive(Debug, Clone, Default)]
pub struct RandomStrategy {
    grid: Grid<Mark>,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn knowledge(&self) -> &Grid<Mark> {
        &self.grid
    }
}

impl Strategy for RandomStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn choose_attack(&mut self, rng: &mut SmallRng) -> Result<Location, StrategyError> {
        random_unknown(&self.grid, rng, |_| true).ok_or(StrategyError::NoTargetAvailable)
    }

    fn report_result(
        &mut self,
        target: Location,
        result: &AttackResult,
    ) -> Result<(), StrategyError> {
        record_mark(&mut self.grid, target, result)
    }

    fn knowledge_glyphs(&self) -> Grid<char> {
        glyphs(&self.grid)
    }
}

/// Record `Hit` or `Miss`; sinking counts as a hit.
pub(crate) fn record_mark(
    grid: &mut Grid<Mark>,
    target: Location,
    result: &AttackResult,
) -> Result<(), StrategyError> {
    ensure_unattacked(grid, target)?;
    let mark = if result.is_hit() { Mark::Hit } else { Mark::Miss };
    grid.set(target, mark);
    Ok(())
}
