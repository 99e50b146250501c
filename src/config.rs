use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// Standard fleet, longest first. Placement walks this order.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Patrol Boat", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Rejection-sampling bound for a single ship. Exceeding it means the board
/// cannot hold the requested fleet.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Weight the probability-density strategy adds to cells that could extend a
/// known hit. Must exceed the largest open-space score a single cell can reach
/// with the standard fleet (34).
pub const HIT_WEIGHT: u32 = 50;

/// Ship lengths of the standard fleet, in `SHIPS` order.
pub fn fleet_lengths() -> [usize; NUM_SHIPS] {
    core::array::from_fn(|i| SHIPS[i].length())
}
