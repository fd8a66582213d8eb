//! Move conversions for four-character coordinate notation.
//!
//! A move is written as origin then destination, for example `b3d5`. Parsing
//! returns explicit errors for malformed text instead of assuming
//! well-formed input; legality against a position is a separate concern.

use crate::game_state::draughts_types::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Parse a four-character coordinate move (for example: "b3d5").
pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<Move, String> {
    if long_algebraic.len() != 4 || !long_algebraic.is_ascii() {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;
    Ok(Move::new(from, to))
}

/// Render a move in four-character coordinate notation.
pub fn move_to_long_algebraic(mv: Move) -> Result<String, String> {
    let mut out = String::new();
    out.push_str(&square_to_algebraic(mv.from)?);
    out.push_str(&square_to_algebraic(mv.to)?);
    Ok(out)
}
