#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::config::BOARD_SIZE;
use crate::fleet::Fleet;
use crate::grid::Grid;
use crate::heat::HeatMap;
use crate::location::Location;

const SIZE: usize = BOARD_SIZE as usize;

fn header(out: &mut String, width: usize) {
    out.push_str("   ");
    for c in 0..SIZE {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {:>width$}", ch, width = width);
    }
    out.push('\n');
}

/// Render a knowledge grid, one glyph per cell.
pub fn render_knowledge(glyphs: &Grid<char>) -> String {
    let mut out = String::new();
    header(&mut out, 1);
    for (r, row) in glyphs.rows().iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for ch in row {
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Render a heat map with right-aligned weights.
pub fn render_heat_map(heat: &HeatMap) -> String {
    let mut out = String::new();
    header(&mut out, 4);
    for (r, row) in heat.rows().iter().enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for w in row {
            let _ = write!(out, " {:>4}", w);
        }
        out.push('\n');
    }
    out
}

/// Render a player's own fleet: ship initials, `X` for struck segments and
/// `o` for misses.
pub fn render_fleet(fleet: &Fleet) -> String {
    let mut glyphs = Grid::filled('.');
    for loc in Location::all() {
        let attacked = fleet.was_attacked(loc);
        let ch = match fleet.ship_at(loc) {
            Some(_) if attacked => 'X',
            Some(ship) => ship.name().chars().next().unwrap_or('S'),
            None if attacked => 'o',
            None => '.',
        };
        glyphs.set(loc, ch);
    }
    render_knowledge(&glyphs)
}
