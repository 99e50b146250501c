//! Heat maps over a knowledge grid: per-cell counts of ship placements that
//! remain consistent with the evidence. Every map is recomputed from scratch
//! each turn; nothing here holds state between calls.

use rand::Rng;

use crate::grid::{CellState, Grid};
use crate::location::{Direction, Location};
use crate::ship::Orientation;

/// Per-cell placement weight.
pub type HeatMap = Grid<u32>;

/// Number of cells past `from` in `dir` satisfying `passable`, stopping at the
/// first failure, the board edge, or `cap`.
pub fn run_length<T: CellState>(
    grid: &Grid<T>,
    from: Location,
    dir: Direction,
    cap: usize,
    passable: impl Fn(T) -> bool,
) -> usize {
    let mut n = 0;
    let mut cur = from;
    while n < cap {
        match cur.step(dir) {
            Some(next) if passable(grid.get(next)) => {
                n += 1;
                cur = next;
            }
            _ => break,
        }
    }
    n
}

/// How many placements of a ship of `length` cover a cell with `back` open
/// cells behind it and `forward` open cells ahead on one axis.
pub fn placements(back: usize, forward: usize, length: usize) -> u32 {
    if length == 0 {
        return 0;
    }
    let span = back.min(length - 1) + forward.min(length - 1) + 1;
    if span >= length {
        (span - length + 1) as u32
    } else {
        0
    }
}

/// Open-space pass: for every unknown cell, sum over remaining lengths and
/// both axes the placements that fit in the surrounding unknown run.
pub fn open_space_heat<T: CellState>(grid: &Grid<T>, ships_left: &[usize]) -> HeatMap {
    let mut heat = HeatMap::filled(0);
    for loc in grid.unknown_cells() {
        let mut sum = 0;
        for orientation in Orientation::BOTH {
            let (back_dir, fwd_dir) = Direction::along(orientation);
            let back = run_length(grid, loc, back_dir, usize::MAX, T::is_unknown);
            let forward = run_length(grid, loc, fwd_dir, usize::MAX, T::is_unknown);
            sum += ships_left
                .iter()
                .map(|&len| placements(back, forward, len))
                .sum::<u32>();
        }
        heat.set(loc, sum);
    }
    heat
}

/// Hit-reinforcement pass: for every cell matching `is_source`, for each
/// remaining length and axis, measure the run through `passable` cells capped
/// at `length - 1` each side. When the span can hold the ship, add `weight` to
/// every unknown cell inside it.
pub fn add_hit_heat<T: CellState>(
    heat: &mut HeatMap,
    grid: &Grid<T>,
    ships_left: &[usize],
    weight: u32,
    is_source: impl Fn(T) -> bool,
    passable: impl Fn(T) -> bool + Copy,
) {
    for (loc, state) in grid.iter() {
        if !is_source(state) {
            continue;
        }
        for &len in ships_left {
            if len == 0 {
                continue;
            }
            for orientation in Orientation::BOTH {
                let (back_dir, fwd_dir) = Direction::along(orientation);
                let back = run_length(grid, loc, back_dir, len - 1, passable);
                let forward = run_length(grid, loc, fwd_dir, len - 1, passable);
                if back + forward + 1 < len {
                    continue;
                }
                let start = loc.offset(back_dir, back).unwrap_or(loc);
                for i in 0..=back + forward {
                    if let Some(cell) = start.offset(fwd_dir, i) {
                        if grid.get(cell).is_unknown() {
                            heat.set(cell, heat.get(cell) + weight);
                        }
                    }
                }
            }
        }
    }
}

/// Sum of all weights.
pub fn total(heat: &HeatMap) -> u64 {
    heat.iter().map(|(_, w)| w as u64).sum()
}

/// Highest-weight unknown cell, ties broken uniformly at random. Cells that
/// were already attacked are never returned, even when every weight is zero.
pub fn pick_hottest<T: CellState, R: Rng + ?Sized>(
    heat: &HeatMap,
    grid: &Grid<T>,
    rng: &mut R,
) -> Option<Location> {
    let max = grid.unknown_cells().map(|loc| heat.get(loc)).max()?;
    let count = grid
        .unknown_cells()
        .filter(|&loc| heat.get(loc) == max)
        .count();
    let pick = rng.random_range(0..count);
    grid.unknown_cells()
        .filter(|&loc| heat.get(loc) == max)
        .nth(pick)
}
