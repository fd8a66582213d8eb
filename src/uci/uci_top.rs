//! UCI-style protocol front-end and command loop.
//!
//! Parses line-oriented commands, maintains the current position, routes
//! `go` requests to the selected engine, and emits protocol-compliant
//! output. `board` and `battle` are local extensions for terminal play.

use std::io::{self, BufRead, Write};

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, make_move, MoveOutcome};
use crate::utils::algebraic::square_to_algebraic;
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};
use crate::utils::render_game_state::render_game_state;

const UCI_ENGINE_NAME: &str = "Damson Draughts";
const UCI_ENGINE_AUTHOR: &str = "jwkunz using Codex";

const DEFAULT_BATTLE_MOVES: u32 = 50;

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut uci = UciState::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = uci.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct UciState {
    game_state: GameState,
    engine: Box<dyn Engine>,
    skill_level: u8,
    debug_mode: bool,
}

impl UciState {
    fn new() -> Self {
        let skill_level = 3;
        Self {
            game_state: GameState::new_game(),
            engine: build_engine(skill_level),
            skill_level,
            debug_mode: false,
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", UCI_ENGINE_NAME)?;
                writeln!(out, "id author {}", UCI_ENGINE_AUTHOR)?;
                writeln!(
                    out,
                    "option name Skill Level type spin default 3 min 1 max 3"
                )?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    writeln!(out, "info string setoption error: {}", err)?;
                }
            }
            "ucinewgame" => {
                self.game_state = GameState::new_game();
                self.engine.new_game();
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "info string position error: {}", err)?;
                }
            }
            "go" => {
                if let Err(err) = self.handle_go(trimmed, out) {
                    writeln!(out, "info string go error: {}", err)?;
                    writeln!(out, "bestmove 0000")?;
                }
            }
            "board" => {
                writeln!(out, "{}", render_game_state(&self.game_state))?;
            }
            "battle" => {
                let max_moves = parts
                    .next()
                    .and_then(|tok| tok.parse::<u32>().ok())
                    .unwrap_or(DEFAULT_BATTLE_MOVES);
                if let Err(err) = self.handle_battle(max_moves, out) {
                    writeln!(out, "info string battle error: {}", err)?;
                }
            }
            "debug" => {
                let mode = parts.next().unwrap_or_default();
                self.debug_mode = mode.eq_ignore_ascii_case("on");
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                // Unknown commands are ignored for UCI compatibility.
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // setoption

        let mut name_tokens = Vec::<String>::new();
        let mut value_tokens = Vec::<String>::new();
        let mut mode = "";

        for tok in tokens {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok.to_owned()),
                _ if mode == "value" => value_tokens.push(tok.to_owned()),
                _ => {}
            }
        }

        let name = name_tokens.join(" ");
        let value = value_tokens.join(" ");

        if name.eq_ignore_ascii_case("Skill Level") {
            let parsed = value
                .parse::<u8>()
                .map_err(|_| format!("invalid Skill Level value '{}'", value))?;
            if !(1..=3).contains(&parsed) {
                return Err(format!("Skill Level out of range: {}", parsed));
            }
            self.skill_level = parsed;
            self.engine = build_engine(self.skill_level);
            self.engine.new_game();
        } else {
            self.engine.set_option(&name, &value)?;
        }

        Ok(())
    }

    fn handle_position(&mut self, line: &str) -> Result<(), String> {
        let mut tokens = line.split_whitespace().peekable();
        let _ = tokens.next(); // "position"

        let mut base_state = if let Some(tok) = tokens.next() {
            match tok {
                "startpos" => GameState::new_game(),
                "fen" => {
                    let mut fen_parts = Vec::<String>::new();
                    while let Some(next) = tokens.peek() {
                        if *next == "moves" {
                            break;
                        }
                        fen_parts.push(tokens.next().unwrap_or_default().to_owned());
                    }
                    if fen_parts.is_empty() {
                        return Err("missing FEN after 'position fen'".to_owned());
                    }
                    let fen = fen_parts.join(" ");
                    GameState::from_fen(&fen)?
                }
                other => return Err(format!("unsupported position token '{}'", other)),
            }
        } else {
            return Err("incomplete position command".to_owned());
        };

        if tokens.peek().copied() == Some("moves") {
            let _ = tokens.next();
            for lan in tokens {
                let mv = long_algebraic_to_move(lan)?;
                base_state = apply_move(&base_state, mv).map_err(|err| format!("{lan}: {err}"))?;
                base_state.switch_player();
            }
        }

        self.game_state = base_state;
        Ok(())
    }

    fn handle_go(&mut self, line: &str, out: &mut impl Write) -> Result<(), String> {
        let params = parse_go_params(line)?;

        if self.debug_mode {
            writeln!(out, "info string debug position {}", self.game_state.get_fen())
                .map_err(|e| e.to_string())?;
        }

        let result = self.engine.choose_move(&self.game_state, &params)?;

        for info in &result.info_lines {
            writeln!(out, "{}", info).map_err(|e| e.to_string())?;
        }

        if let Some(best_move) = result.best_move {
            let lan = move_to_long_algebraic(best_move)?;
            writeln!(out, "bestmove {}", lan).map_err(|e| e.to_string())?;
        } else {
            writeln!(out, "bestmove 0000").map_err(|e| e.to_string())?;
        }

        Ok(())
    }

    /// Self-play: the selected engine drives both sides, printing each move
    /// and the board, then a closing log of captures and promotions.
    fn handle_battle(&mut self, max_moves: u32, out: &mut impl Write) -> Result<(), String> {
        writeln!(out, "Starting a self-play battle for {} moves", max_moves)
            .map_err(|e| e.to_string())?;
        self.game_state.reset_to_start_position();

        let params = GoParams::default();
        let mut events = Vec::<String>::new();

        for move_number in 1..=max_moves {
            let result = self.engine.choose_move(&self.game_state, &params)?;
            let mover = self.game_state.side_to_move;
            let chosen = match result.best_move {
                Some(mv) => mv,
                None => break,
            };

            let lan = move_to_long_algebraic(chosen)?;
            writeln!(out, "Move {}: {:?} plays {}", move_number, mover, lan)
                .map_err(|e| e.to_string())?;

            match make_move(&mut self.game_state, chosen) {
                MoveOutcome::Rejected => {
                    return Err(format!("engine chose an illegal move: {lan}"));
                }
                MoveOutcome::Applied { captured, promoted } => {
                    if let Some(piece) = captured {
                        events.push(format!(
                            "Move {}: {:?} captured a {:?} {:?} on {}",
                            move_number,
                            mover,
                            piece.color,
                            piece.kind,
                            square_to_algebraic(chosen.midpoint())?
                        ));
                    }
                    if promoted {
                        events.push(format!(
                            "Move {}: {:?} promoted to king on {}",
                            move_number,
                            mover,
                            square_to_algebraic(chosen.to)?
                        ));
                    }
                }
            }

            writeln!(out, "{}", render_game_state(&self.game_state))
                .map_err(|e| e.to_string())?;

            self.game_state.switch_player();

            if self.game_state.is_game_over() {
                match self.game_state.winner() {
                    Some(winner) => writeln!(out, "Game over! {:?} wins!", winner),
                    None => writeln!(out, "Game over! It's a draw."),
                }
                .map_err(|e| e.to_string())?;
                break;
            }
        }

        if !self.game_state.is_game_over() {
            writeln!(
                out,
                "Battle ended after {} moves without a conclusion",
                max_moves
            )
            .map_err(|e| e.to_string())?;
        }

        writeln!(out, "\nGame Events:").map_err(|e| e.to_string())?;
        for event in &events {
            writeln!(out, "{}", event).map_err(|e| e.to_string())?;
        }

        Ok(())
    }
}

fn build_engine(skill_level: u8) -> Box<dyn Engine> {
    match skill_level {
        1 => Box::new(RandomEngine::new()),
        2 => Box::new(GreedyEngine::new()),
        _ => Box::new(MinimaxEngine::new()),
    }
}

fn parse_go_params(line: &str) -> Result<GoParams, String> {
    let mut params = GoParams::default();
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let mut i = 0usize;

    while i < tokens.len() {
        if tokens[i] == "depth" {
            i += 1;
            params.depth = tokens.get(i).and_then(|tok| tok.parse::<u8>().ok());
        }
        i += 1;
    }

    Ok(params)
}
