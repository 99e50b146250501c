use rand::rngs::SmallRng;

use crate::common::{AttackResult, BoardError, StrategyError};
use crate::fleet::Fleet;
use crate::location::Location;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Placing its own fleet before play
/// - Selecting targets to attack
/// - Handling feedback from its shots
pub trait Player {
    /// Generate this player's fleet for a new match.
    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<Fleet, BoardError>;

    /// Choose the next target coordinate.
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Location, StrategyError>;

    /// Inform the player of the result of its last shot.
    fn handle_guess_result(
        &mut self,
        target: Location,
        result: &AttackResult,
    ) -> Result<(), StrategyError>;

    /// Inform the player of an opponent shot against its fleet.
    fn handle_opponent_guess(&mut self, _target: Location, _result: &AttackResult) {}
}
