use rand::rngs::SmallRng;

use crate::common::{AttackResult, BoardError, GameError};
use crate::config::{BOARD_SIZE, TOTAL_SHIP_CELLS};
use crate::fleet::Fleet;
use crate::location::Location;
use crate::player::Player;
use crate::ship::BB;
use crate::strategy::Strategy;

/// Upper bound on shots against one fleet.
pub const MAX_SHOTS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One player's side of a match: its own fleet and a record of its shots.
#[derive(Debug, Clone)]
pub struct GameEngine {
    fleet: Fleet,
    guess_hits: BB,
    guess_misses: BB,
    enemy_remaining: usize,
}

impl GameEngine {
    pub fn new(fleet: Fleet) -> Self {
        Self {
            fleet,
            guess_hits: BB::new(),
            guess_misses: BB::new(),
            enemy_remaining: TOTAL_SHIP_CELLS,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Bitboard of our successful shots on the opponent fleet.
    pub fn guess_hits(&self) -> BB {
        self.guess_hits
    }

    /// Bitboard of our missed shots on the opponent fleet.
    pub fn guess_misses(&self) -> BB {
        self.guess_misses
    }

    pub fn shots_fired(&self) -> usize {
        self.guess_hits.count_ones() + self.guess_misses.count_ones()
    }

    /// Handle an opponent shot on our fleet.
    pub fn opponent_guess(&mut self, target: Location) -> Result<AttackResult, BoardError> {
        self.fleet.receive_attack(target)
    }

    /// Record the result of a shot we made against the opponent.
    pub fn record_guess(&mut self, target: Location, result: &AttackResult) -> Result<(), BoardError> {
        let (row, col) = (target.row(), target.col());
        if self.guess_hits.get(row, col)? || self.guess_misses.get(row, col)? {
            return Err(BoardError::AlreadyGuessed(target));
        }
        if result.is_hit() {
            self.guess_hits.set(row, col)?;
            self.enemy_remaining = self.enemy_remaining.saturating_sub(1);
        } else {
            self.guess_misses.set(row, col)?;
        }
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        if self.fleet.all_sunk() {
            GameStatus::Lost
        } else if self.enemy_remaining == 0 {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

/// Outcome of a full two-player match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchReport {
    /// Index of the winning player, 0 or 1.
    pub winner: usize,
    /// Shots fired by each player.
    pub shots: [usize; 2],
}

/// Play `first` against `second`, `first` shooting first, until one fleet is
/// sunk.
pub fn play_match(
    first: &mut dyn Player,
    second: &mut dyn Player,
    rng: &mut SmallRng,
) -> Result<MatchReport, GameError> {
    let mut engine1 = GameEngine::new(first.place_ships(rng)?);
    let mut engine2 = GameEngine::new(second.place_ships(rng)?);

    for round in 1..=MAX_SHOTS {
        take_turn(first, &mut engine1, second, &mut engine2, rng)?;
        if engine2.status() == GameStatus::Lost {
            log::info!("player 1 wins in round {}", round);
            return Ok(MatchReport {
                winner: 0,
                shots: [engine1.shots_fired(), engine2.shots_fired()],
            });
        }
        take_turn(second, &mut engine2, first, &mut engine1, rng)?;
        if engine1.status() == GameStatus::Lost {
            log::info!("player 2 wins in round {}", round);
            return Ok(MatchReport {
                winner: 1,
                shots: [engine1.shots_fired(), engine2.shots_fired()],
            });
        }
    }
    Err(GameError::TooManyTurns(MAX_SHOTS))
}

fn take_turn(
    shooter: &mut dyn Player,
    shooter_engine: &mut GameEngine,
    target_player: &mut dyn Player,
    target_engine: &mut GameEngine,
    rng: &mut SmallRng,
) -> Result<(), GameError> {
    let target = shooter.select_target(rng)?;
    let result = target_engine.opponent_guess(target)?;
    shooter_engine.record_guess(target, &result)?;
    shooter.handle_guess_result(target, &result)?;
    target_player.handle_opponent_guess(target, &result);
    Ok(())
}

/// Let `strategy` attack `fleet` until every ship is sunk. Returns the number
/// of shots taken.
pub fn hunt(
    strategy: &mut dyn Strategy,
    fleet: &mut Fleet,
    rng: &mut SmallRng,
) -> Result<usize, GameError> {
    for shot in 1..=MAX_SHOTS {
        let target = strategy.choose_attack(rng)?;
        let result = fleet.receive_attack(target)?;
        strategy.report_result(target, &result)?;
        if fleet.all_sunk() {
            log::debug!("{} sank the fleet in {} shots", strategy.kind(), shot);
            return Ok(shot);
        }
    }
    Err(GameError::TooManyTurns(MAX_SHOTS))
}
