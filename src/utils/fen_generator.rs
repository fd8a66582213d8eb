//! Draughts FEN generation.
//!
//! Renders a position in the crate's FEN dialect, the inverse of
//! `fen_parser`. Ranks run from 8 down to 1, empties compress to digit runs.

use crate::game_state::draughts_types::Color;
use crate::game_state::game_state::GameState;

pub fn generate_fen(state: &GameState) -> String {
    let mut out = String::new();

    for row in (0..8usize).rev() {
        let mut empty_run = 0u32;

        for col in 0..8usize {
            match state.pieces[row][col] {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    out.push(piece.symbol());
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
        if row > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match state.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::draughts_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_renders_the_canonical_fen() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_round_trips_through_parser_and_generator() {
        let fens = [
            STARTING_POSITION_FEN,
            "8/8/2b5/3W4/4w3/8/8/1B6 w",
            "8/5b2/6w1/8/8/8/8/8 b",
            "8/8/8/8/8/8/8/8 w",
        ];
        for fen in fens {
            let state = GameState::from_fen(fen).expect("FEN should parse");
            assert_eq!(generate_fen(&state), fen);
        }
    }
}
