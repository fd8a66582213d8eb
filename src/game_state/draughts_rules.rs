//! Canonical draughts-rule constants.
//!
//! Static rule literals: the standard starting position in the crate's FEN
//! dialect and the diagonal direction tables used by move generation.

use crate::game_state::draughts_types::Color;

/// Standard starting position: twelve men per side on the dark cells of the
/// first and last three rows, Light to move.
pub const STARTING_POSITION_FEN: &str =
    "b1b1b1b1/1b1b1b1b/b1b1b1b1/8/8/1w1w1w1w/w1w1w1w1/1w1w1w1w w";

/// Forward diagonals for a light man (toward increasing rows).
pub const LIGHT_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// Forward diagonals for a dark man (toward decreasing rows).
pub const DARK_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// All four diagonals, king movement.
pub const KING_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

/// Direction set for a man of `color`.
#[inline]
pub const fn man_directions(color: Color) -> [(i8, i8); 2] {
    match color {
        Color::Light => LIGHT_MAN_DIRECTIONS,
        Color::Dark => DARK_MAN_DIRECTIONS,
    }
}
