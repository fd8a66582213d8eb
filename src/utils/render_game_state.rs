//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for the `board` command and self-play
//! output. Empty playable (dark) cells render as `·` so piece placement
//! reads at a glance; unplayable cells stay blank.

use crate::game_state::game_state::GameState;

/// Render the board with file and rank labels, rank 8 first.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8usize).rev() {
        out.push(char::from(b'1' + row as u8));
        out.push(' ');

        for col in 0..8usize {
            match state.pieces[row][col] {
                Some(piece) => out.push(piece.symbol()),
                None if (row + col) % 2 == 1 => out.push('·'),
                None => out.push(' '),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::game_state::GameState;

    #[test]
    fn rendering_labels_files_and_ranks() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[9], "  a b c d e f g h");
        assert!(lines[1].starts_with("8 "));
        assert!(lines[8].starts_with("1 "));
    }

    #[test]
    fn rendering_shows_piece_symbols_on_their_squares() {
        let state = GameState::from_fen("8/8/8/1b1W4/8/8/8/1B6 w").expect("FEN should parse");
        let rendered = render_game_state(&state);
        let lines: Vec<&str> = rendered.lines().collect();

        // Rank 5 (line index 4) holds the dark man and the light king.
        assert_eq!(lines[4], "5   b   W   ·   · 5");
        // Rank 1 (line index 8) holds the dark king on b1.
        assert!(lines[8].starts_with("1   B"));
    }

    #[test]
    fn empty_playable_cells_render_as_dots() {
        let rendered = render_game_state(&GameState::new_empty());
        // Rank 1 row: dark cells at b1, d1, f1, h1.
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[8], "1   ·   ·   ·   · 1");
    }
}
