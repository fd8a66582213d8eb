//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! Scores are light-minus-dark: positive favors Light, negative favors Dark.

use crate::game_state::draughts_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;

pub trait BoardScorer: Send + Sync {
    /// Static score of the position, positive when Light is ahead.
    fn score(&self, state: &GameState) -> i32;
}

/// Pure material count: man = 1, king = 3, negated for Dark.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    /// Material value of a (color, kind) pair, signed toward Light. The
    /// domain is exactly four values, so a plain match does the job.
    #[inline]
    pub const fn piece_value(color: Color, kind: PieceKind) -> i32 {
        let value = match kind {
            PieceKind::Man => 1,
            PieceKind::King => 3,
        };
        match color {
            Color::Light => value,
            Color::Dark => -value,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, state: &GameState) -> i32 {
        let mut score = 0i32;
        for row in state.pieces.iter() {
            for cell in row.iter() {
                if let Some(piece) = cell {
                    score += Self::piece_value(piece.color, piece.kind);
                }
            }
        }
        score
    }
}

/// Material plus man advancement and a central-square bonus. This is the
/// evaluation the minimax search runs on.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    fn score(&self, state: &GameState) -> i32 {
        let mut score = 0i32;

        for row in 0..8i32 {
            for col in 0..8i32 {
                let piece = match state.pieces[row as usize][col as usize] {
                    Some(piece) => piece,
                    None => continue,
                };

                score += MaterialScorer::piece_value(piece.color, piece.kind);

                // Men gain value as they close in on the promotion rank.
                if piece.kind == PieceKind::Man {
                    score += match piece.color {
                        Color::Light => row / 2,
                        Color::Dark => -((7 - row) / 2),
                    };
                }

                // Flat bonus for occupying the central 4x4 block.
                if (2..=5).contains(&row) && (2..=5).contains(&col) {
                    score += match piece.color {
                        Color::Light => 1,
                        Color::Dark => -1,
                    };
                }
            }
        }

        score
    }
}
