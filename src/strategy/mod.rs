//! Attack strategies.
//!
//! Each turn the driver calls [`Strategy::choose_attack`], resolves the shot
//! against the opponent's fleet and hands the outcome back through
//! [`Strategy::report_result`] before the next turn. Strategies own their
//! knowledge grids outright; callers only ever see shared references.
//!
//! - [`RandomStrategy`]: uniform over unattacked cells
//! - [`HuntTargetStrategy`]: checkerboard hunting plus a neighbour frontier
//! - [`ComprehensionStrategy`]: deduction passes and two heat maps
//! - [`EckspurtStrategy`]: combined open-space and hit-reinforcement heat map

use core::fmt;
use core::str::FromStr;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{AttackResult, StrategyError};
use crate::fleet::PlacementRule;
use crate::grid::{CellState, Grid};
use crate::location::Location;

pub mod comprehension;
pub mod eckspurt;
pub mod hunt_target;
pub mod random;
mod ships_left;

pub use comprehension::ComprehensionStrategy;
pub use eckspurt::EckspurtStrategy;
pub use hunt_target::HuntTargetStrategy;
pub use random::RandomStrategy;
pub use ships_left::ShipsLeft;

/// Per-turn decision maker.
pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    /// Pick the next cell to attack. Never returns a cell already attacked.
    fn choose_attack(&mut self, rng: &mut SmallRng) -> Result<Location, StrategyError>;

    /// Fold the outcome of an attack on `target` into the knowledge grid.
    fn report_result(
        &mut self,
        target: Location,
        result: &AttackResult,
    ) -> Result<(), StrategyError>;

    /// Legality rule this strategy uses for its own fleet.
    fn placement_rule(&self) -> PlacementRule {
        PlacementRule::Basic
    }

    /// Knowledge grid flattened to display glyphs.
    fn knowledge_glyphs(&self) -> Grid<char>;
}

/// The closed set of strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, clap::ValueEnum))]
pub enum StrategyKind {
    Random,
    HuntTarget,
    Comprehension,
    Eckspurt,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Random,
        StrategyKind::HuntTarget,
        StrategyKind::Comprehension,
        StrategyKind::Eckspurt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::HuntTarget => "hunt-target",
            StrategyKind::Comprehension => "comprehension",
            StrategyKind::Eckspurt => "eckspurt",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(UnknownStrategy)
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownStrategy;

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected one of random, hunt-target, comprehension, eckspurt")
    }
}

/// One strategy of any kind.
#[derive(Debug, Clone)]
pub enum AnyStrategy {
    Random(RandomStrategy),
    HuntTarget(HuntTargetStrategy),
    Comprehension(ComprehensionStrategy),
    Eckspurt(EckspurtStrategy),
}

impl AnyStrategy {
    pub fn new(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Random => AnyStrategy::Random(RandomStrategy::new()),
            StrategyKind::HuntTarget => AnyStrategy::HuntTarget(HuntTargetStrategy::new()),
            StrategyKind::Comprehension => {
                AnyStrategy::Comprehension(ComprehensionStrategy::new())
            }
            StrategyKind::Eckspurt => AnyStrategy::Eckspurt(EckspurtStrategy::new()),
        }
    }

    fn inner(&self) -> &dyn Strategy {
        match self {
            AnyStrategy::Random(s) => s,
            AnyStrategy::HuntTarget(s) => s,
            AnyStrategy::Comprehension(s) => s,
            AnyStrategy::Eckspurt(s) => s,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Strategy {
        match self {
            AnyStrategy::Random(s) => s,
            AnyStrategy::HuntTarget(s) => s,
            AnyStrategy::Comprehension(s) => s,
            AnyStrategy::Eckspurt(s) => s,
        }
    }

    /// Remaining-ship multiset, for strategies that track one.
    pub fn ships_left(&self) -> Option<&ShipsLeft> {
        match self {
            AnyStrategy::Comprehension(s) => Some(s.ships_left()),
            AnyStrategy::Eckspurt(s) => Some(s.ships_left()),
            _ => None,
        }
    }
}

impl Strategy for AnyStrategy {
    fn kind(&self) -> StrategyKind {
        self.inner().kind()
    }

    fn choose_attack(&mut self, rng: &mut SmallRng) -> Result<Location, StrategyError> {
        self.inner_mut().choose_attack(rng)
    }

    fn report_result(
        &mut self,
        target: Location,
        result: &AttackResult,
    ) -> Result<(), StrategyError> {
        self.inner_mut().report_result(target, result)
    }

    fn placement_rule(&self) -> PlacementRule {
        self.inner().placement_rule()
    }

    fn knowledge_glyphs(&self) -> Grid<char> {
        self.inner().knowledge_glyphs()
    }
}

/// Uniformly random unattacked cell among those accepted by `filter`.
pub fn random_unknown<T: CellState, R: Rng + ?Sized>(
    grid: &Grid<T>,
    rng: &mut R,
    filter: impl Fn(Location) -> bool,
) -> Option<Location> {
    let count = grid.unknown_cells().filter(|&loc| filter(loc)).count();
    if count == 0 {
        return None;
    }
    let pick = rng.random_range(0..count);
    grid.unknown_cells().filter(|&loc| filter(loc)).nth(pick)
}

/// Map any knowledge grid to display glyphs.
pub fn glyphs<T: CellState>(grid: &Grid<T>) -> Grid<char> {
    let mut out = Grid::filled('.');
    for (loc, state) in grid.iter() {
        out.set(loc, state.glyph());
    }
    out
}

/// Fail with `RepeatedAttack` unless `target` is still unknown.
pub(crate) fn ensure_unattacked<T: CellState>(
    grid: &Grid<T>,
    target: Location,
) -> Result<(), StrategyError> {
    if grid.get(target).is_unknown() {
        Ok(())
    } else {
        log::warn!("result reported for already-attacked cell {}", target);
        Err(StrategyError::RepeatedAttack(target))
    }
}
