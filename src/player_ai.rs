use rand::rngs::SmallRng;

use crate::common::{AttackResult, BoardError, StrategyError};
use crate::fleet::Fleet;
use crate::location::Location;
use crate::player::Player;
use crate::strategy::{AnyStrategy, Strategy, StrategyKind};

/// Computer player driven by one of the built-in strategies.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    strategy: AnyStrategy,
}

impl AiPlayer {
    pub fn new(kind: StrategyKind) -> Self {
        Self {
            strategy: AnyStrategy::new(kind),
        }
    }

    /// Fresh fleet and fresh strategy state for a new match.
    pub fn new_game(kind: StrategyKind, rng: &mut SmallRng) -> Result<(Fleet, Self), BoardError> {
        let mut player = Self::new(kind);
        let fleet = player.place_ships(rng)?;
        Ok((fleet, player))
    }

    /// Read-only view of the strategy for rendering and debugging.
    pub fn strategy(&self) -> &AnyStrategy {
        &self.strategy
    }

    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind()
    }
}

impl Player for AiPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<Fleet, BoardError> {
        Fleet::random(rng, self.strategy.placement_rule())
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Location, StrategyError> {
        self.strategy.choose_attack(rng)
    }

    fn handle_guess_result(
        &mut self,
        target: Location,
        result: &AttackResult,
    ) -> Result<(), StrategyError> {
        self.strategy.report_result(target, result)
    }
}
