//! Move application.
//!
//! `make_move` mutates a board in place and reports a tagged outcome, so a
//! caller can always tell a rejected move from an applied quiet move.
//! `apply_move` is the copy-based variant used by search and the UCI
//! position handler.

use crate::game_state::draughts_types::{Move, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_valid_move;

/// Result of attempting to apply a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move failed legality checks; the board was not touched.
    Rejected,
    /// The move was applied, with the jumped piece (if any) and whether the
    /// mover was promoted on arrival.
    Applied {
        captured: Option<Piece>,
        promoted: bool,
    },
}

/// Apply `mv` to `state` in place.
///
/// Illegal moves leave the board untouched and return
/// [`MoveOutcome::Rejected`]. On success the origin is cleared, a jumped
/// piece is removed from the crossed cell, and a man reaching its promotion
/// row lands as a king. The side to move is not switched here.
pub fn make_move(state: &mut GameState, mv: Move) -> MoveOutcome {
    if !is_valid_move(state, mv) {
        return MoveOutcome::Rejected;
    }

    // Validation guarantees in-bounds endpoints and an occupied origin.
    let piece = match state.pieces[mv.from.0 as usize][mv.from.1 as usize].take() {
        Some(piece) => piece,
        None => return MoveOutcome::Rejected,
    };

    let captured = if mv.is_jump() {
        let mid = mv.midpoint();
        state.pieces[mid.0 as usize][mid.1 as usize].take()
    } else {
        None
    };

    let promoted = piece.kind == PieceKind::Man && mv.to.0 == piece.color.promotion_row();
    let landed = if promoted {
        Piece::new(piece.color, PieceKind::King)
    } else {
        piece
    };
    state.pieces[mv.to.0 as usize][mv.to.1 as usize] = Some(landed);

    MoveOutcome::Applied { captured, promoted }
}

/// Copy-based application: the resulting board, or an error for an illegal
/// move. The side to move carries over unchanged; drivers switch it
/// explicitly after committing a move.
pub fn apply_move(state: &GameState, mv: Move) -> Result<GameState, String> {
    let mut next = state.clone();
    match make_move(&mut next, mv) {
        MoveOutcome::Rejected => Err(format!(
            "illegal move: ({}, {}) -> ({}, {})",
            mv.from.0, mv.from.1, mv.to.0, mv.to.1
        )),
        MoveOutcome::Applied { .. } => Ok(next),
    }
}
