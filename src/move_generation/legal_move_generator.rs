//! Legal move generation.
//!
//! Enumerates steps and single jumps for every piece of a color, row-major
//! over origin cells, forward diagonals first. Simple moves and captures are
//! offered together: this rule set has no mandatory-capture precedence.

use crate::game_state::draughts_rules::{man_directions, KING_DIRECTIONS};
use crate::game_state::draughts_types::{
    offset_square, square_in_bounds, Color, Move, PieceKind, Square,
};
use crate::game_state::game_state::GameState;

/// Every legal move for the pieces of `color`, row-major over origin cells.
pub fn generate_moves(state: &GameState, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for row in 0..8i8 {
        for col in 0..8i8 {
            if let Some(piece) = state.piece_at((row, col)) {
                if piece.color == color {
                    generate_moves_for_square(state, (row, col), &mut moves);
                }
            }
        }
    }

    moves
}

/// Append the moves available to the piece on `from`, if any.
pub fn generate_moves_for_square(state: &GameState, from: Square, moves: &mut Vec<Move>) {
    let piece = match state.piece_at(from) {
        Some(piece) => piece,
        None => return,
    };

    match piece.kind {
        PieceKind::Man => {
            for direction in man_directions(piece.color) {
                generate_moves_in_direction(state, from, direction, moves);
            }
        }
        PieceKind::King => {
            for direction in KING_DIRECTIONS {
                generate_moves_in_direction(state, from, direction, moves);
            }
        }
    }
}

/// One diagonal: a step onto the adjacent empty cell, plus a jump when the
/// adjacent cell holds an opponent and the cell behind it is free.
fn generate_moves_in_direction(
    state: &GameState,
    from: Square,
    direction: (i8, i8),
    moves: &mut Vec<Move>,
) {
    let piece = match state.piece_at(from) {
        Some(piece) => piece,
        None => return,
    };

    let step = offset_square(from, direction.0, direction.1);
    if square_in_bounds(step) && state.piece_at(step).is_none() {
        moves.push(Move::new(from, step));
    }

    let landing = offset_square(from, 2 * direction.0, 2 * direction.1);
    if square_in_bounds(landing) && state.piece_at(landing).is_none() {
        if let Some(jumped) = state.piece_at(step) {
            if jumped.color != piece.color {
                moves.push(Move::new(from, landing));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_moves;
    use crate::game_state::draughts_types::{Color, Move};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_checks::is_valid_move;

    #[test]
    fn start_position_offers_seven_moves_per_side() {
        let state = GameState::new_game();
        assert_eq!(generate_moves(&state, Color::Light).len(), 7);
        assert_eq!(generate_moves(&state, Color::Dark).len(), 7);
    }

    #[test]
    fn every_generated_move_is_valid() {
        let positions = [
            GameState::new_game(),
            GameState::from_fen("8/8/2b5/3W4/4w3/8/8/1B6 w").expect("FEN should parse"),
            GameState::from_fen("8/8/2b5/3W4/4w3/8/8/1B6 b").expect("FEN should parse"),
        ];

        for state in positions {
            for color in [Color::Light, Color::Dark] {
                for mv in generate_moves(&state, color) {
                    assert!(
                        is_valid_move(&state, mv),
                        "generated move {mv:?} failed validation"
                    );
                }
            }
        }
    }

    #[test]
    fn captures_and_steps_are_offered_together() {
        // Light man at (2, 1) can step to (3, 0) or jump the dark man on
        // (3, 2); neither is preferred over the other.
        let state = GameState::from_fen("8/8/8/8/2b5/1w6/8/8 w").expect("FEN should parse");
        let moves = generate_moves(&state, Color::Light);
        assert!(moves.contains(&Move::new((2, 1), (3, 0))));
        assert!(moves.contains(&Move::new((2, 1), (4, 3))));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn kings_generate_in_all_four_diagonals() {
        let state = GameState::from_fen("8/8/8/3W4/8/8/8/8 w").expect("FEN should parse");
        let moves = generate_moves(&state, Color::Light);
        assert_eq!(moves.len(), 4);
    }

    #[test]
    fn generation_order_is_row_major() {
        let state = GameState::new_game();
        let moves = generate_moves(&state, Color::Light);
        let mut origins: Vec<(i8, i8)> = moves.iter().map(|mv| mv.from).collect();
        let mut sorted = origins.clone();
        sorted.sort();
        origins.dedup();
        // All movable men sit on one row at the start, and origins arrive in
        // ascending column order.
        assert_eq!(origins, vec![(2, 1), (2, 3), (2, 5), (2, 7)]);
        assert_eq!(sorted.first(), Some(&(2, 1)));
    }

    #[test]
    fn blocked_piece_generates_nothing() {
        // A lone dark man on row 0 has no forward rows left.
        let state = GameState::from_fen("8/8/8/8/8/8/8/1b6 b").expect("FEN should parse");
        assert!(generate_moves(&state, Color::Dark).is_empty());
    }
}
