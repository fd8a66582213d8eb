//! Difficulty-3 fixed-depth minimax engine.
//!
//! Wraps the core minimax search with the standard positional scorer. The
//! search depth is a crate constant; a `go depth` request is acknowledged in
//! an info line and otherwise ignored.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::StandardScorer;
use crate::search::minimax::find_best_move;

pub struct MinimaxEngine {
    scorer: StandardScorer,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            scorer: StandardScorer,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn choose_move(
        &mut self,
        state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut out = EngineOutput::default();

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string minimax_engine fixed depth, ignoring requested depth {depth}"
            ));
        }

        let result = find_best_move(state, &self.scorer)?;
        out.info_lines.push(format!(
            "info string minimax_engine score {} nodes {}",
            result.best_score, result.nodes
        ));
        out.best_move = result.best_move;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::draughts_types::Move;
    use crate::game_state::game_state::GameState;

    #[test]
    fn minimax_engine_takes_the_winning_capture() {
        let state = GameState::from_fen("8/8/8/8/8/8/2b5/1w6 w").expect("FEN should parse");
        let mut engine = MinimaxEngine::new();
        let out = engine
            .choose_move(&state, &GoParams::default())
            .expect("engine should produce output");
        assert_eq!(out.best_move, Some(Move::new((0, 1), (2, 3))));
    }

    #[test]
    fn minimax_engine_acknowledges_an_ignored_depth_request() {
        let state = GameState::new_game();
        let mut engine = MinimaxEngine::new();
        let out = engine
            .choose_move(
                &state,
                &GoParams {
                    depth: Some(9),
                },
            )
            .expect("engine should produce output");
        assert!(out
            .info_lines
            .iter()
            .any(|line| line.contains("ignoring requested depth 9")));
        assert!(out.best_move.is_some());
    }

    #[test]
    fn minimax_engine_reports_no_move_when_stuck() {
        let state = GameState::from_fen("8/8/8/8/8/8/8/1b6 b").expect("FEN should parse");
        let mut engine = MinimaxEngine::new();
        let out = engine
            .choose_move(&state, &GoParams::default())
            .expect("engine should produce output");
        assert_eq!(out.best_move, None);
    }
}
