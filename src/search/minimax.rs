//! Fixed-depth minimax search.
//!
//! Explores the full game tree to a constant depth with no pruning. Light
//! maximizes and Dark minimizes. Every node searches an independent copy of
//! the board, so no branch ever observes another branch's mutations.

use crate::game_state::draughts_types::{Color, Move};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::search::board_scoring::BoardScorer;

/// Search depth in plies. Fixed by design, not configurable at call time.
const SEARCH_DEPTH: u8 = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move for the side to move, or `None` when it has no legal move.
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Search `state` to the fixed depth and return the move judged best for
/// the side to move.
///
/// A position with no legal moves yields `best_move: None` together with
/// the static evaluation; callers decide what a moveless position means
/// (usually: game over).
pub fn find_best_move<S: BoardScorer>(
    state: &GameState,
    scorer: &S,
) -> Result<SearchResult, String> {
    let mut nodes = 0u64;
    let maximizing = state.side_to_move == Color::Light;
    let (best_score, best_move) = minimax(state, scorer, SEARCH_DEPTH, maximizing, &mut nodes)?;

    Ok(SearchResult {
        best_move,
        best_score,
        nodes,
    })
}

fn minimax<S: BoardScorer>(
    state: &GameState,
    scorer: &S,
    depth: u8,
    maximizing: bool,
    nodes: &mut u64,
) -> Result<(i32, Option<Move>), String> {
    *nodes += 1;

    if depth == 0 {
        return Ok((scorer.score(state), None));
    }

    let mover = if maximizing { Color::Light } else { Color::Dark };
    let moves = generate_moves(state, mover);
    if moves.is_empty() {
        return Ok((scorer.score(state), None));
    }

    let mut best_move = None;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let next = apply_move(state, mv)?;
        let (value, _) = minimax(&next, scorer, depth - 1, !maximizing, nodes)?;

        // Strict comparison: the first move reaching the best value, in
        // generation order, is the one kept.
        let improves = if maximizing {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_value = value;
            best_move = Some(mv);
        }
    }

    Ok((best_value, best_move))
}
