#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod common;
mod config;
mod fleet;
mod game;
mod grid;
pub mod heat;
mod location;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
mod ship;
pub mod strategy;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use grid::*;
pub use heat::HeatMap;
pub use location::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use player_ai::*;
pub use ship::*;
pub use strategy::{AnyStrategy, Strategy, StrategyKind};
#[cfg(feature = "std")]
pub use ui::*;
