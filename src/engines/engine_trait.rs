//! Engine abstraction layer used by the UCI subsystem.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::draughts_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Depth hint from the `go` command. Engines with a fixed search depth
    /// are free to ignore it.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The move to play, or `None` when the side to move has none.
    pub best_move: Option<Move>,
    /// `info string ...` lines for the protocol front-end to emit.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn choose_move(
        &mut self,
        state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
