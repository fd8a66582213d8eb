//! Structural move legality checks.
//!
//! A move is checked against the board: bounds, occupancy, diagonality, man
//! direction, and the single-jump capture rule. Whether the moving piece
//! belongs to the side to move is the caller's concern; the generator only
//! offers moves for the color it was asked about.

use crate::game_state::draughts_types::{square_in_bounds, Color, Move, PieceKind};
use crate::game_state::game_state::GameState;

/// True iff `mv` is legal on `state` for whichever piece sits on its origin.
///
/// Legal means: both endpoints on the board, an occupied origin, an empty
/// destination, a diagonal displacement, forward-only for men, and for a
/// two-cell move an opposing piece on the crossed cell.
pub fn is_valid_move(state: &GameState, mv: Move) -> bool {
    if !square_in_bounds(mv.from) || !square_in_bounds(mv.to) {
        return false;
    }

    let piece = match state.piece_at(mv.from) {
        Some(piece) => piece,
        None => return false,
    };

    if state.piece_at(mv.to).is_some() {
        return false;
    }

    let row_diff = mv.to.0 - mv.from.0;
    let col_diff = mv.to.1 - mv.from.1;

    if row_diff.abs() != col_diff.abs() {
        return false;
    }

    // Men only advance toward the opposing back rank; kings go anywhere
    // diagonal.
    if piece.kind == PieceKind::Man {
        let forward = match piece.color {
            Color::Light => row_diff > 0,
            Color::Dark => row_diff < 0,
        };
        if !forward {
            return false;
        }
    }

    match row_diff.abs() {
        1 => true,
        2 => match state.piece_at(mv.midpoint()) {
            Some(jumped) => jumped.color != piece.color,
            None => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_move;
    use crate::game_state::draughts_types::Move;
    use crate::game_state::game_state::GameState;

    #[test]
    fn plain_diagonal_step_is_legal() {
        let state = GameState::from_fen("8/8/8/8/8/8/2w5/8 w").expect("FEN should parse");
        assert!(is_valid_move(&state, Move::new((1, 2), (2, 1))));
        assert!(is_valid_move(&state, Move::new((1, 2), (2, 3))));
    }

    #[test]
    fn men_cannot_move_backward() {
        let state = GameState::from_fen("8/8/8/8/8/8/2w5/8 w").expect("FEN should parse");
        assert!(!is_valid_move(&state, Move::new((1, 2), (0, 1))));
        assert!(!is_valid_move(&state, Move::new((1, 2), (0, 3))));

        let dark = GameState::from_fen("8/1b6/8/8/8/8/8/8 b").expect("FEN should parse");
        assert!(is_valid_move(&dark, Move::new((6, 1), (5, 0))));
        assert!(!is_valid_move(&dark, Move::new((6, 1), (7, 0))));
    }

    #[test]
    fn kings_move_in_all_four_diagonals() {
        let state = GameState::from_fen("8/8/8/3W4/8/8/8/8 w").expect("FEN should parse");
        assert!(is_valid_move(&state, Move::new((4, 3), (5, 4))));
        assert!(is_valid_move(&state, Move::new((4, 3), (5, 2))));
        assert!(is_valid_move(&state, Move::new((4, 3), (3, 4))));
        assert!(is_valid_move(&state, Move::new((4, 3), (3, 2))));
    }

    #[test]
    fn non_diagonal_and_long_moves_are_rejected() {
        let state = GameState::from_fen("8/8/8/3W4/8/8/8/8 w").expect("FEN should parse");
        assert!(!is_valid_move(&state, Move::new((4, 3), (4, 5))));
        assert!(!is_valid_move(&state, Move::new((4, 3), (6, 4))));
        assert!(!is_valid_move(&state, Move::new((4, 3), (7, 6))));
    }

    #[test]
    fn jump_requires_an_opposing_piece_on_the_crossed_cell() {
        // Light man at (0, 1), dark man at (1, 2): the jump crosses (1, 2).
        let capture = GameState::from_fen("8/8/8/8/8/8/2b5/1w6 w").expect("FEN should parse");
        assert!(is_valid_move(&capture, Move::new((0, 1), (2, 3))));

        // Jumping an empty cell or a friendly piece is illegal.
        let empty_mid = GameState::from_fen("8/8/8/8/8/8/8/1w6 w").expect("FEN should parse");
        assert!(!is_valid_move(&empty_mid, Move::new((0, 1), (2, 3))));

        let own_mid = GameState::from_fen("8/8/8/8/8/8/2w5/1w6 w").expect("FEN should parse");
        assert!(!is_valid_move(&own_mid, Move::new((0, 1), (2, 3))));
    }

    #[test]
    fn occupied_destination_is_rejected() {
        let state = GameState::from_fen("8/8/8/8/8/3b4/2w5/8 w").expect("FEN should parse");
        assert!(!is_valid_move(&state, Move::new((1, 2), (2, 3))));
    }

    #[test]
    fn out_of_bounds_endpoints_are_rejected() {
        let state = GameState::new_game();
        assert!(!is_valid_move(&state, Move::new((2, 7), (3, 8))));
        assert!(!is_valid_move(&state, Move::new((-1, 0), (0, 1))));
    }

    #[test]
    fn empty_origin_is_rejected() {
        let state = GameState::new_game();
        assert!(!is_valid_move(&state, Move::new((3, 3), (4, 4))));
    }
}
