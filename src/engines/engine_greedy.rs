//! Difficulty-2 capture-greedy engine.
//!
//! Values each legal move by the material of the piece it jumps (nothing
//! for a quiet move) and picks randomly among the best. One ply of lookahead,
//! no search.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::search::board_scoring::MaterialScorer;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for GreedyEngine {
    fn choose_move(
        &mut self,
        state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let legal_moves = generate_moves(state, state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string greedy_engine requested_depth {depth}"
            ));
        }

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();

        for mv in &legal_moves {
            let capture_value = if mv.is_jump() {
                match state.piece_at(mv.midpoint()) {
                    Some(jumped) => MaterialScorer::piece_value(jumped.color, jumped.kind).abs(),
                    None => 0,
                }
            } else {
                0
            };

            if capture_value > best_value {
                best_value = capture_value;
                best_moves.clear();
                best_moves.push(*mv);
            } else if capture_value == best_value {
                best_moves.push(*mv);
            }
        }

        let mut rng = rand::rng();
        let picked = best_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose greedy best move")?;

        out.info_lines.push(format!(
            "info string greedy_engine capture_score {best_value}"
        ));
        out.best_move = Some(*picked);
        Ok(out)
    }
}
