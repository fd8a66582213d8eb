//! Draughts FEN parsing.
//!
//! Reads the crate's FEN dialect: eight `/`-separated rank fields from rank
//! 8 down to rank 1 (`w`/`W`/`b`/`B` pieces, digit runs of empties), then
//! the side to move. Malformed text is reported as an error, never a panic.

use crate::game_state::draughts_types::{Color, Piece};
use crate::game_state::game_state::GameState;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or("FEN is empty")?;
    let side = fields.next().ok_or("FEN is missing the side to move")?;
    if fields.next().is_some() {
        return Err(format!("FEN has trailing fields: {fen}"));
    }

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(format!("FEN must have 8 ranks, got {}", ranks.len()));
    }

    let mut state = GameState::new_empty();

    for (i, rank_text) in ranks.iter().enumerate() {
        // Rank 8 (row 7) is listed first.
        let row = 7 - i;
        let mut col = 0usize;

        for ch in rank_text.chars() {
            if let Some(run) = ch.to_digit(10) {
                if run == 0 {
                    return Err(format!("Invalid empty-run digit '0' in rank: {rank_text}"));
                }
                col += run as usize;
            } else {
                let piece = Piece::from_symbol(ch)
                    .ok_or_else(|| format!("Invalid piece character '{ch}' in rank: {rank_text}"))?;
                if col >= 8 {
                    return Err(format!("Rank overflows eight columns: {rank_text}"));
                }
                state.pieces[row][col] = Some(piece);
                col += 1;
            }
        }

        if col != 8 {
            return Err(format!("Rank does not fill eight columns: {rank_text}"));
        }
    }

    state.side_to_move = match side {
        "w" => Color::Light,
        "b" => Color::Dark,
        other => return Err(format!("Invalid side to move in FEN: {other}")),
    };

    Ok(state)
}
