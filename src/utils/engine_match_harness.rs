//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without UCI I/O,
//! with an optional seeded random opening prefix. A side with no legal move
//! loses; games that outlive the ply budget count as draws.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, RngExt, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::draughts_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, MoveOutcome};
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Dark ran out of moves.
    LightWin,
    /// Light ran out of moves.
    DarkWin,
    /// Neither side got stuck within the ply budget.
    DrawMaxPlies,
}

impl MatchOutcome {
    /// PDN result token for this outcome.
    pub const fn result_token(self) -> &'static str {
        match self {
            MatchOutcome::LightWin => "1-0",
            MatchOutcome::DarkWin => "0-1",
            MatchOutcome::DrawMaxPlies => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    /// Capture and promotion log, one line per event.
    pub events: Vec<String>,
    pub light_move_count: u32,
    pub dark_move_count: u32,
    pub light_total_time_ns: u128,
    pub dark_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the starting position.
///
/// `engine_light` moves first.
pub fn play_engine_match(
    mut engine_light: Box<dyn Engine>,
    mut engine_dark: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_internal(
        GameState::new_game(),
        &mut engine_light,
        &mut engine_dark,
        seed,
        config,
        true,
    )
}

/// Play a single match from a caller-provided state, with no random opening.
///
/// Intended for curated acceptance positions (for example endgame setups).
pub fn play_engine_match_from_state(
    mut engine_light: Box<dyn Engine>,
    mut engine_dark: Box<dyn Engine>,
    start_state: GameState,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    play_engine_match_internal(
        start_state,
        &mut engine_light,
        &mut engine_dark,
        seed,
        config,
        false,
    )
}

fn play_engine_match_internal(
    mut state: GameState,
    engine_light: &mut Box<dyn Engine>,
    engine_dark: &mut Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> Result<MatchResult, String> {
    engine_light.new_game();
    engine_dark.new_game();

    let opening_moves_lan = if apply_random_opening {
        let (state_after_opening, opening_moves_lan) = apply_seeded_random_opening(
            &state,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        )?;
        state = state_after_opening;
        opening_moves_lan
    } else {
        Vec::new()
    };

    let mut played_moves_lan = Vec::<String>::new();
    let mut events = Vec::<String>::new();
    let mut light_move_count = 0u32;
    let mut dark_move_count = 0u32;
    let mut light_total_time_ns = 0u128;
    let mut dark_total_time_ns = 0u128;

    for ply in 0..config.max_plies {
        let legal_moves = state.all_legal_moves();
        if legal_moves.is_empty() {
            let outcome = match state.side_to_move {
                Color::Light => MatchOutcome::DarkWin,
                Color::Dark => MatchOutcome::LightWin,
            };
            return Ok(MatchResult {
                outcome,
                final_state: state,
                opening_moves_lan,
                played_moves_lan,
                events,
                light_move_count,
                dark_move_count,
                light_total_time_ns,
                dark_total_time_ns,
            });
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_light.choose_move(&state, &config.go_params)?,
            Color::Dark => engine_dark.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                light_move_count = light_move_count.saturating_add(1);
                light_total_time_ns = light_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Dark => {
                dark_move_count = dark_move_count.saturating_add(1);
                dark_total_time_ns = dark_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.unwrap_or(legal_moves[0]);
        if !legal_moves.contains(&chosen) {
            return Err("engine returned illegal move".to_owned());
        }

        let lan = move_to_long_algebraic(chosen)?;
        match make_move(&mut state, chosen) {
            MoveOutcome::Rejected => {
                return Err(format!("legal move was rejected on apply: {lan}"));
            }
            MoveOutcome::Applied { captured, promoted } => {
                if let Some(piece) = captured {
                    events.push(format!(
                        "ply {}: {} captured a {} {} with {}",
                        ply + 1,
                        color_label(mover),
                        color_label(piece.color),
                        kind_label(piece.kind),
                        lan
                    ));
                }
                if promoted {
                    events.push(format!(
                        "ply {}: {} promoted to king with {}",
                        ply + 1,
                        color_label(mover),
                        lan
                    ));
                }
            }
        }
        played_moves_lan.push(lan);
        state.switch_player();
    }

    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state,
        opening_moves_lan,
        played_moves_lan,
        events,
        light_move_count,
        dark_move_count,
        light_total_time_ns,
        dark_total_time_ns,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_light = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (light, dark) = if player1_is_light {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} light={} dark={}",
                i + 1,
                config.games,
                seed,
                light,
                dark
            );
        }

        let result = if player1_is_light {
            play_engine_match(
                player1_factory(),
                player2_factory(),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(),
                player1_factory(),
                seed,
                config.per_game.clone(),
            )?
        };

        if player1_is_light {
            stats.player1_moves = stats.player1_moves.saturating_add(result.light_move_count);
            stats.player2_moves = stats.player2_moves.saturating_add(result.dark_move_count);
            stats.player1_total_time_ns = stats
                .player1_total_time_ns
                .saturating_add(result.light_total_time_ns);
            stats.player2_total_time_ns = stats
                .player2_total_time_ns
                .saturating_add(result.dark_total_time_ns);
        } else {
            stats.player1_moves = stats.player1_moves.saturating_add(result.dark_move_count);
            stats.player2_moves = stats.player2_moves.saturating_add(result.light_move_count);
            stats.player1_total_time_ns = stats
                .player1_total_time_ns
                .saturating_add(result.dark_total_time_ns);
            stats.player2_total_time_ns = stats
                .player2_total_time_ns
                .saturating_add(result.light_total_time_ns);
        }

        let mapped = match result.outcome {
            MatchOutcome::LightWin => {
                let player = if player1_is_light {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin {
                    player,
                    color: Color::Light,
                }
            }
            MatchOutcome::DarkWin => {
                let player = if player1_is_light {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                } else {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                };
                SeriesOutcome::PlayerWin {
                    player,
                    color: Color::Dark,
                }
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);
    }

    stats.player1_avg_move_time_ms = avg_move_time_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = avg_move_time_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

fn avg_move_time_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        return 0.0;
    }
    (total_ns as f64) / (moves as f64) / 1_000_000.0
}

/// Advance the position by a seeded random number of random legal plies.
fn apply_seeded_random_opening(
    initial: &GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<(GameState, Vec<String>), String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves_lan = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves = state.all_legal_moves();
        if legal_moves.is_empty() {
            break;
        }

        let chosen = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or("failed to choose a random opening move")?;

        let lan = move_to_long_algebraic(*chosen)?;
        if let MoveOutcome::Rejected = make_move(&mut state, *chosen) {
            return Err(format!("legal opening move was rejected: {lan}"));
        }
        opening_moves_lan.push(lan);
        state.switch_player();
    }

    Ok((state, opening_moves_lan))
}

fn color_label(color: Color) -> &'static str {
    match color {
        Color::Light => "Light",
        Color::Dark => "Dark",
    }
}

fn kind_label(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Man => "man",
        PieceKind::King => "king",
    }
}

#[cfg(test)]
mod tests {
    use super::{
        play_engine_match, play_engine_match_from_state, play_engine_match_series, MatchConfig,
        MatchOutcome, MatchSeriesConfig,
    };
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    fn random_box() -> Box<dyn Engine> {
        Box::new(RandomEngine::new())
    }

    #[test]
    fn stuck_side_loses_immediately() {
        let start = GameState::from_fen("8/8/8/8/8/8/8/1b6 b").expect("FEN should parse");
        let result = play_engine_match_from_state(
            random_box(),
            random_box(),
            start,
            7,
            MatchConfig::default(),
        )
        .expect("match should run");

        assert_eq!(result.outcome, MatchOutcome::LightWin);
        assert!(result.played_moves_lan.is_empty());
        assert_eq!(result.outcome.result_token(), "1-0");
    }

    #[test]
    fn random_match_terminates_with_a_coherent_record() {
        let config = MatchConfig {
            max_plies: 30,
            opening_min_plies: 0,
            opening_max_plies: 0,
            ..MatchConfig::default()
        };
        let result =
            play_engine_match(random_box(), random_box(), 42, config).expect("match should run");

        assert!(result.played_moves_lan.len() <= 30);
        assert_eq!(
            result.light_move_count + result.dark_move_count,
            result.played_moves_lan.len() as u32
        );
        for lan in &result.played_moves_lan {
            long_algebraic_to_move(lan).expect("recorded move should parse");
        }
    }

    #[test]
    fn series_accounts_for_every_game() {
        let stats = play_engine_match_series(
            random_box,
            random_box,
            MatchSeriesConfig {
                games: 3,
                base_seed: 99,
                per_game: MatchConfig {
                    max_plies: 20,
                    ..MatchConfig::default()
                },
                verbose: false,
            },
        )
        .expect("series should run");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(
            stats.player1_wins + stats.player2_wins + stats.draws,
            3
        );
    }

    #[test]
    fn seeded_opening_is_deterministic() {
        let config = MatchConfig {
            max_plies: 0,
            opening_min_plies: 4,
            opening_max_plies: 4,
            ..MatchConfig::default()
        };
        let first = play_engine_match(random_box(), random_box(), 7, config.clone())
            .expect("match should run");
        let second =
            play_engine_match(random_box(), random_box(), 7, config).expect("match should run");
        assert_eq!(first.opening_moves_lan, second.opening_moves_lan);
        assert_eq!(first.opening_moves_lan.len(), 4);
    }
}
