//! Move-path enumeration for validation and benchmarks.
//!
//! Counts the move sequences reachable from a position at a fixed depth,
//! applying each move to a copy and handing the turn to the opponent per
//! ply. Captures and promotions are tallied on the final ply, so known
//! counts pin down both generation and application.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, MoveOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

/// Count move paths of length `depth` starting from `state`.
pub fn perft(state: &GameState, depth: u8) -> Result<PerftCounts, String> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();

    for mv in state.all_legal_moves() {
        let mut next = state.clone();
        match make_move(&mut next, mv) {
            MoveOutcome::Rejected => {
                return Err(format!("generated move was rejected: {mv:?}"));
            }
            MoveOutcome::Applied { captured, promoted } => {
                if depth == 1 {
                    total.nodes += 1;
                    if captured.is_some() {
                        total.captures += 1;
                    }
                    if promoted {
                        total.promotions += 1;
                    }
                } else {
                    next.switch_player();
                    total.merge(perft(&next, depth - 1)?);
                }
            }
        }
    }

    Ok(total)
}

/// Node count only.
#[inline]
pub fn perft_nodes(state: &GameState, depth: u8) -> Result<u64, String> {
    Ok(perft(state, depth)?.nodes)
}
